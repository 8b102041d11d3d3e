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

//! How the processes of a unit are stopped. Embedded into `[Service]`.
#![allow(non_snake_case)]
use unit_parser::prelude::{Literal, UnitEntry, UnitSection};

/// the method to kill the process
#[derive(UnitEntry, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KillMode {
    /// kill all the process in the cgroup of the unit
    #[default]
    ControlGroup,
    /// only kill the main process
    Process,
    /// send SIGTERM to the main process and SIGKILL to the rest of the cgroup
    Mixed,
    /// kill nothing
    None,
}

#[derive(UnitSection, Default, Clone, Debug, PartialEq)]
pub struct SectionKill {
    pub KillMode: Option<KillMode>,
    pub KillSignal: Option<Literal>,
    pub SendSIGKILL: Option<bool>,
    pub SendSIGHUP: Option<bool>,
    pub FinalKillSignal: Option<Literal>,
}

impl SectionKill {
    /// the configured kill mode, `control-group` when unset
    pub fn kill_mode(&self) -> KillMode {
        self.KillMode.unwrap_or_default()
    }
}
