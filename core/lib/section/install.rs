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

//! The `[Install]` section, used when enabling a unit.
#![allow(non_snake_case)]
use unit_parser::prelude::UnitSection;

#[derive(UnitSection, Default, Clone, Debug, PartialEq)]
pub struct SectionInstall {
    pub Alias: Vec<String>,
    pub WantedBy: Vec<String>,
    pub RequiredBy: Vec<String>,
    pub Also: Vec<String>,
    pub DefaultInstance: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use unit_parser::prelude::*;

    #[test]
    fn test_section_install() {
        let doc = parse("[Install]\nWantedBy=multi-user.target\nWantedBy=graphical.target").unwrap();
        let install =
            SectionInstall::from_section(doc.section("Install").unwrap(), "Install").unwrap();
        assert_eq!(install.WantedBy, vec!["multi-user.target", "graphical.target"]);
        assert_eq!(install.DefaultInstance, None);

        let err = SectionInstall::from_section(
            parse("[Install]\nWantedBy=a\nBefore=b").unwrap().section("Install").unwrap(),
            "Install",
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownEntryError { ref key, .. } if key == "Before"));
    }
}
