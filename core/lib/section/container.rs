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

//! The `[Container]` section of a `.container` unit, run by a container engine.
#![allow(non_snake_case)]
use unit_parser::prelude::{Literal, UnitEntry, UnitSection};

/// When the image is pulled before the container starts
#[derive(UnitEntry, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullPolicy {
    Always,
    Missing,
    Never,
    Newer,
}

/// Where updated images are looked for
#[derive(UnitEntry, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoUpdatePolicy {
    Registry,
    Local,
}

#[derive(UnitSection, Default, Clone, Debug, PartialEq)]
pub struct SectionContainer {
    #[entry(must)]
    pub Image: String,
    pub ContainerName: Option<String>,
    /// arguments passed to the image entry point
    pub Exec: Option<String>,
    pub Environment: Vec<String>,
    pub PublishPort: Vec<String>,
    pub Volume: Vec<String>,
    pub Network: Vec<String>,
    pub Label: Vec<String>,
    pub User: Option<Literal>,
    pub Group: Option<Literal>,
    pub Pull: Option<PullPolicy>,
    pub AutoUpdate: Option<AutoUpdatePolicy>,
}

impl SectionContainer {
    /// A container section running `image`.
    pub fn new<S: Into<String>>(image: S) -> Self {
        SectionContainer {
            Image: image.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unit_parser::prelude::*;

    #[test]
    fn test_section_container() {
        let doc = parse(
            "[Container]
Image=docker.io/library/nginx:latest
PublishPort=8080:80
PublishPort=8443:443
Volume=/srv/www:/usr/share/nginx/html:ro
Pull=newer
AutoUpdate=registry",
        )
        .unwrap();
        let container =
            SectionContainer::from_section(doc.section("Container").unwrap(), "Container")
                .unwrap();
        assert_eq!(container.Image, "docker.io/library/nginx:latest");
        assert_eq!(container.PublishPort, vec!["8080:80", "8443:443"]);
        assert_eq!(container.Volume.len(), 1);
        assert_eq!(container.Pull, Some(PullPolicy::Newer));
        assert_eq!(container.AutoUpdate, Some(AutoUpdatePolicy::Registry));
    }

    #[test]
    fn test_section_container_needs_image() {
        let doc = parse("[Container]\nContainerName=web").unwrap();
        let err = SectionContainer::from_section(doc.section("Container").unwrap(), "Container")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::EntryMissingError { ref key, ref section } if key == "Image" && section == "Container"
        ));
    }

    #[test]
    fn test_section_container_new() {
        let mut container = SectionContainer::new("alpine");
        container.set_property("Container", "Exec", "sleep infinity").unwrap();
        let section = container.to_section();
        assert_eq!(section.get("Image"), Some(&Value::from("alpine")));
        assert_eq!(section.get("Exec"), Some(&Value::from("sleep infinity")));
        assert_eq!(section.len(), 2);
    }
}
