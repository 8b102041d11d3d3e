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

//! sysunit: typed systemd unit files.
//!
//! The codec between unit file text and a [Document] lives in `unit_parser`;
//! this crate defines the sections of the service, timer and container unit types
//! on top of it, and loads them from files.
//! ```ignore
//! use sysunit::{load_unit, ServiceUnit};
//! use unit_parser::prelude::UnitConfig;
//!
//! let mut unit: ServiceUnit = load_unit("/etc/systemd/system/web.service")?;
//! unit.set_property("Service", "Restart", "always")?;
//! println!("{}", unit.to_unit_string());
//! ```
//!
//! [Document]: unit_parser::document::Document

pub mod error;
pub mod load;
pub mod section;
pub mod units;

pub use load::{load_unit, write_unit, UnitLoader};
pub use units::{ContainerUnit, ServiceUnit, TimerUnit};
