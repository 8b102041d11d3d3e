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

//! Error define of sysunit.
//! Codec and validation failures come from unit_parser and are wrapped together with
//! the file they were found in.
use snafu::prelude::*;
#[allow(unused_imports)]
pub use snafu::ResultExt;

/// sysunit Error
#[allow(missing_docs)]
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Failed to read unit file {}: {}", path, source))]
    ReadFile {
        path: String,
        source: std::io::Error,
    },

    #[snafu(display("Failed to write unit file {}: {}", path, source))]
    WriteFile {
        path: String,
        source: std::io::Error,
    },

    #[snafu(display("Invalid unit file {}: {}", path, source))]
    Parse {
        path: String,
        source: unit_parser::error::Error,
    },

    #[snafu(display("{} is not a .{} unit file", path, suffix))]
    UnitType { path: String, suffix: &'static str },
}

/// new Result
pub type Result<T, E = Error> = std::result::Result<T, E>;
