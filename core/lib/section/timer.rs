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

//! The `[Timer]` section of a `.timer` unit.
#![allow(non_snake_case)]
use unit_parser::prelude::{TimeSpan, UnitSection};

/// Time spans and calendar expressions are kept as written, `0` included.
#[derive(UnitSection, Default, Clone, Debug, PartialEq)]
pub struct SectionTimer {
    pub OnActiveSec: Option<TimeSpan>,
    pub OnBootSec: Option<TimeSpan>,
    pub OnStartupSec: Option<TimeSpan>,
    pub OnUnitActiveSec: Option<TimeSpan>,
    pub OnUnitInactiveSec: Option<TimeSpan>,
    pub OnCalendar: Vec<String>,
    pub AccuracySec: Option<TimeSpan>,
    pub RandomizedDelaySec: Option<TimeSpan>,
    pub Persistent: Option<bool>,
    pub WakeSystem: Option<bool>,
    pub RemainAfterElapse: Option<bool>,
    pub Unit: Option<String>,
}

impl SectionTimer {
    /// Whether any trigger is configured.
    pub fn has_trigger(&self) -> bool {
        self.OnActiveSec.is_some()
            || self.OnBootSec.is_some()
            || self.OnStartupSec.is_some()
            || self.OnUnitActiveSec.is_some()
            || self.OnUnitInactiveSec.is_some()
            || !self.OnCalendar.is_empty()
    }
}
