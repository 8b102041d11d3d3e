// Copyright (c) 2022 Huawei Technologies Co.,Ltd. All rights reserved.
//
// sysMaster is licensed under Mulan PSL v2.
// You can use this software according to the terms and conditions of the Mulan
// PSL v2.
// You may obtain a copy of Mulan PSL v2 at:
//         http://license.coscl.org.cn/MulanPSL2
// THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY
// KIND, EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO
// NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
// See the Mulan PSL v2 for more details.

//! This crate provides common functions for unit tests
use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

/// get the source project root path, two levels above this crate
pub fn get_project_root() -> io::Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut current_path = Some(manifest_dir);

    while let Some(p) = current_path {
        if p.join("Cargo.toml").is_file() && p.join("libs").is_dir() {
            return Ok(p.into());
        }
        current_path = p.parent();
    }

    Err(io::Error::new(ErrorKind::NotFound, "NotFound"))
}

/// get the path of a unit file under `tests/test_units`
pub fn get_test_unit(name: &str) -> io::Result<PathBuf> {
    let path = get_project_root()?.join("tests").join("test_units").join(name);
    if !path.is_file() {
        return Err(io::Error::new(
            ErrorKind::NotFound,
            format!("{} is not a test unit", name),
        ));
    }
    Ok(path)
}

/// read the content of a unit file under `tests/test_units`
pub fn read_test_unit(name: &str) -> io::Result<String> {
    fs::read_to_string(get_test_unit(name)?)
}

#[cfg(test)]
mod tests {
    use crate::{get_project_root, get_test_unit, read_test_unit};

    #[test]
    fn test_get_project_root() {
        let mut file_path = get_project_root().unwrap();
        file_path.push("libs");

        assert!(file_path.is_dir());
    }

    #[test]
    fn test_get_test_unit() {
        let file_path = get_test_unit("deployer.service").unwrap();
        assert!(file_path.is_file());
        assert!(read_test_unit("deployer.service")
            .unwrap()
            .contains("[Service]"));
        assert!(get_test_unit("missing.service").is_err());
    }
}
