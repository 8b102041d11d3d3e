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

//! The sections a unit is composed of.
mod container;
mod exec;
mod install;
mod kill;
mod service;
mod timer;
mod unit;

pub use container::{AutoUpdatePolicy, PullPolicy, SectionContainer};
pub use exec::SectionExec;
pub use install::SectionInstall;
pub use kill::{KillMode, SectionKill};
pub use service::{SectionService, ServiceRestart, ServiceType};
pub use timer::SectionTimer;
pub use unit::SectionUnit;
