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

//! The `[Unit]` section shared by all unit types.
#![allow(non_snake_case)]
use unit_parser::prelude::{TimeSpan, UnitSection};

/// Generic information about the unit and its dependencies.
#[derive(UnitSection, Default, Clone, Debug, PartialEq)]
pub struct SectionUnit {
    pub Description: Option<String>,
    pub Documentation: Vec<String>,
    pub Requires: Vec<String>,
    pub Wants: Vec<String>,
    pub BindsTo: Vec<String>,
    pub PartOf: Vec<String>,
    pub Conflicts: Vec<String>,
    pub Before: Vec<String>,
    pub After: Vec<String>,
    pub OnFailure: Vec<String>,
    pub DefaultDependencies: Option<bool>,
    pub ConditionPathExists: Vec<String>,
    pub AssertPathExists: Vec<String>,
    pub StartLimitIntervalSec: Option<TimeSpan>,
    pub StartLimitBurst: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use unit_parser::prelude::*;

    #[test]
    fn test_section_unit() {
        let doc = parse(
            "[Unit]
Description=Daily cleanup
Documentation=man:tmpfiles.d(5)
After=local-fs.target
After=time-sync.target
DefaultDependencies=no
StartLimitIntervalSec=10s
StartLimitBurst=5",
        )
        .unwrap();
        let unit = SectionUnit::from_section(doc.section("Unit").unwrap(), "Unit").unwrap();
        assert_eq!(unit.Description.as_deref(), Some("Daily cleanup"));
        assert_eq!(unit.Documentation, vec!["man:tmpfiles.d(5)"]);
        assert_eq!(unit.After, vec!["local-fs.target", "time-sync.target"]);
        assert_eq!(unit.DefaultDependencies, Some(false));
        assert_eq!(unit.StartLimitIntervalSec.as_deref(), Some("10s"));
        assert_eq!(unit.StartLimitBurst, Some(5));
        assert!(unit.Wants.is_empty());
    }

    #[test]
    fn test_section_unit_written_in_field_order() {
        let mut unit = SectionUnit::default();
        unit.set_property("Unit", "After", "network.target").unwrap();
        unit.set_property("Unit", "Description", "web").unwrap();
        let keys: Vec<String> = unit.to_section().keys().cloned().collect();
        assert_eq!(keys, ["Description", "After"]);
    }
}
