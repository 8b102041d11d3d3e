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

//! Unit types, each composed of the sections its file may carry.
//! `[Unit]` and `[Install]` are optional everywhere.
#![allow(non_snake_case)]
use crate::section::{
    SectionContainer, SectionInstall, SectionService, SectionTimer, SectionUnit,
};
use unit_parser::prelude::UnitConfig;

/// A `.service` unit.
#[derive(UnitConfig, Default, Clone, Debug, PartialEq)]
#[unit(suffix = "service")]
pub struct ServiceUnit {
    pub Unit: Option<SectionUnit>,
    pub Service: SectionService,
    pub Install: Option<SectionInstall>,
}

/// A `.timer` unit.
#[derive(UnitConfig, Default, Clone, Debug, PartialEq)]
#[unit(suffix = "timer")]
pub struct TimerUnit {
    pub Unit: Option<SectionUnit>,
    pub Timer: SectionTimer,
    pub Install: Option<SectionInstall>,
}

/// A `.container` unit. Its optional `[Service]` section holds the settings of the
/// service generated to run the container.
#[derive(UnitConfig, Default, Clone, Debug, PartialEq)]
#[unit(suffix = "container")]
pub struct ContainerUnit {
    pub Unit: Option<SectionUnit>,
    pub Container: SectionContainer,
    pub Service: Option<SectionService>,
    pub Install: Option<SectionInstall>,
}

impl TimerUnit {
    /// The unit this timer activates: `Unit=` if set, else the service of the same name.
    pub fn activates(&self, timer_name: &str) -> String {
        match &self.Timer.Unit {
            Some(unit) => unit.clone(),
            None => {
                let stem = timer_name.strip_suffix(".timer").unwrap_or(timer_name);
                format!("{}.service", stem)
            }
        }
    }
}
