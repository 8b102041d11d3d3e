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

//! Execution environment of the processes a unit spawns. Embedded into `[Service]`.
#![allow(non_snake_case)]
use unit_parser::prelude::{Literal, UnitSection};

#[derive(UnitSection, Default, Clone, Debug, PartialEq)]
pub struct SectionExec {
    pub WorkingDirectory: Option<String>,
    pub RootDirectory: Option<String>,
    pub User: Option<Literal>,
    pub Group: Option<Literal>,
    pub Environment: Vec<String>,
    pub EnvironmentFile: Vec<String>,
    /// octal text such as `0022`
    pub UMask: Option<Literal>,
    pub Nice: Option<i32>,
    pub StandardOutput: Option<String>,
    pub StandardError: Option<String>,
    pub PrivateTmp: Option<bool>,
    pub NoNewPrivileges: Option<bool>,
    /// boolean, `full` or `strict`
    pub ProtectSystem: Option<String>,
    /// boolean, `read-only` or `tmpfs`
    pub ProtectHome: Option<String>,
    /// a number or `infinity`
    pub LimitNOFILE: Option<Literal>,
}
