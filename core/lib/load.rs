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

//! Reading unit files from disk and writing them back.
use crate::error::*;
use snafu::ensure;
use std::{fs, path::Path};
use unit_parser::prelude::{Diagnostic, ParserOptions, UnitConfig, UnitParser};

/// Loads unit files with one set of parser options, collecting the diagnostics of
/// every file loaded.
#[derive(Debug, Default)]
pub struct UnitLoader {
    parser: UnitParser,
    diagnostics: Vec<(String, Diagnostic)>,
}

impl UnitLoader {
    /// Creates a loader parsing with `options`.
    pub fn new(options: ParserOptions) -> Self {
        UnitLoader {
            parser: UnitParser::new(options),
            diagnostics: Vec::new(),
        }
    }

    /// Creates a loader with options read from `file`, or from the default
    /// parser configuration file.
    pub fn from_config(file: Option<&str>) -> Self {
        Self::new(ParserOptions::new(file))
    }

    /// Loads the unit file at `path`, whose suffix must be the one of `T`.
    pub fn load<T: UnitConfig, P: AsRef<Path>>(&mut self, path: P) -> Result<T> {
        let path = path.as_ref();
        let name = path.to_string_lossy().to_string();
        ensure!(
            path.extension().map_or(false, |ext| ext == T::SUFFIX),
            UnitTypeSnafu {
                path: name,
                suffix: T::SUFFIX,
            }
        );

        let text = fs::read_to_string(path).context(ReadFileSnafu { path: name.clone() })?;
        let doc = self
            .parser
            .parse(&text)
            .context(ParseSnafu { path: name.clone() })?;
        for diagnostic in self.parser.take_diagnostics() {
            self.diagnostics.push((name.clone(), diagnostic));
        }
        let unit = T::from_document(&doc).context(ParseSnafu { path: name.clone() })?;
        log::debug!("Loaded unit file {} with {} sections.", name, doc.len());
        Ok(unit)
    }

    /// Diagnostics found so far, with the file each one is in.
    pub fn diagnostics(&self) -> &[(String, Diagnostic)] {
        &self.diagnostics
    }
}

/// Loads the unit file at `path` with the default parser options.
pub fn load_unit<T: UnitConfig, P: AsRef<Path>>(path: P) -> Result<T> {
    UnitLoader::default().load(path)
}

/// Writes `unit` to `path` as unit file text.
pub fn write_unit<T: UnitConfig, P: AsRef<Path>>(unit: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut text = unit.to_unit_string();
    text.push('\n');
    fs::write(path, text).context(WriteFileSnafu {
        path: path.to_string_lossy().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{ServiceUnit, TimerUnit};

    fn fixture(name: &str) -> std::path::PathBuf {
        libtests::get_test_unit(name).unwrap()
    }

    #[test]
    fn test_load_unit() {
        let unit: ServiceUnit = load_unit(fixture("deployer.service")).unwrap();
        assert!(!unit.Service.ExecStart.is_empty());
    }

    #[test]
    fn test_load_wrong_suffix() {
        let err = load_unit::<TimerUnit, _>(fixture("deployer.service")).unwrap_err();
        assert!(matches!(err, Error::UnitType { suffix: "timer", .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_unit::<ServiceUnit, _>("/nonexistent/sysunit/a.service").unwrap_err();
        assert!(matches!(err, Error::ReadFile { .. }));
    }

    #[test]
    fn test_loader_collects_diagnostics() {
        let mut loader = UnitLoader::default();
        let _: ServiceUnit = loader.load(fixture("ambiguous.service")).unwrap();
        let diagnostics = loader.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].0.ends_with("ambiguous.service"));
        assert_eq!(diagnostics[0].1.key, "RemainAfterExit");
    }
}
