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

//! The `[Service]` section of a `.service` unit.
#![allow(non_snake_case)]
use super::{exec::SectionExec, kill::SectionKill};
use unit_parser::prelude::{TimeSpan, UnitEntry, UnitSection};

/// Service Type
#[derive(UnitEntry, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceType {
    #[default]
    Simple,
    Exec,
    Forking,
    Oneshot,
    Dbus,
    Notify,
    Idle,
}

/// When the service is restarted after its process exits
#[derive(UnitEntry, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceRestart {
    #[default]
    No,
    OnSuccess,
    OnFailure,
    OnAbnormal,
    OnWatchdog,
    OnAbort,
    Always,
}

/// The `[Service]` section. `[Service]` also carries the keys of [SectionExec] and
/// [SectionKill], which are embedded here.
#[derive(UnitSection, Default, Clone, Debug, PartialEq)]
pub struct SectionService {
    pub Type: Option<ServiceType>,
    pub ExecStartPre: Vec<String>,
    pub ExecStart: Vec<String>,
    pub ExecStartPost: Vec<String>,
    pub ExecReload: Vec<String>,
    pub ExecStop: Vec<String>,
    pub ExecStopPost: Vec<String>,
    pub Restart: Option<ServiceRestart>,
    pub RestartSec: Option<TimeSpan>,
    pub TimeoutSec: Option<TimeSpan>,
    pub TimeoutStartSec: Option<TimeSpan>,
    pub TimeoutStopSec: Option<TimeSpan>,
    pub RemainAfterExit: Option<bool>,
    pub PIDFile: Option<String>,
    #[entry(flatten)]
    pub Exec: SectionExec,
    #[entry(flatten)]
    pub Kill: SectionKill,
}

impl SectionService {
    /// the service type, `simple` when unset
    pub fn service_type(&self) -> ServiceType {
        self.Type.unwrap_or_default()
    }

    /// the restart policy, `no` when unset
    pub fn restart(&self) -> ServiceRestart {
        self.Restart.unwrap_or_default()
    }
}
