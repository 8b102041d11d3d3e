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

use std::path::PathBuf;
use sysunit::{
    error::Error,
    load_unit,
    section::{AutoUpdatePolicy, PullPolicy, ServiceRestart, ServiceType},
    write_unit, ContainerUnit, ServiceUnit, TimerUnit, UnitLoader,
};
use unit_parser::prelude::*;

const FIXTURES: [&str; 5] = [
    "deployer.service",
    "ambiguous.service",
    "reopened.service",
    "backup.timer",
    "web.container",
];

fn fixture(name: &str) -> PathBuf {
    libtests::get_test_unit(name).unwrap()
}

#[test]
fn test_load_service() {
    let unit: ServiceUnit = load_unit(fixture("deployer.service")).unwrap();
    let service = &unit.Service;
    assert_eq!(service.service_type(), ServiceType::Oneshot);
    assert_eq!(
        service.ExecStartPre,
        vec!["/opt/d/agent start-1", "/opt/d/agent start-2"]
    );
    assert_eq!(service.ExecStart, vec!["/opt/d/agent run"]);
    assert_eq!(service.Exec.PrivateTmp, Some(true));
    assert_eq!(service.RemainAfterExit, Some(true));
    assert_eq!(
        service.Exec.Environment,
        vec!["DEPLOY_ENV=prod   DEPLOY_REGION=eu"]
    );
    assert_eq!(service.TimeoutSec.as_deref(), Some("90"));
    assert_eq!(service.restart(), ServiceRestart::No);
    assert_eq!(
        unit.Install.as_ref().map(|i| i.WantedBy.clone()),
        Some(vec!["multi-user.target".to_string()])
    );
}

#[test]
fn test_load_timer() {
    let unit: TimerUnit = load_unit(fixture("backup.timer")).unwrap();
    assert_eq!(unit.Timer.OnCalendar, vec!["*-*-* 02:00:00"]);
    assert_eq!(unit.Timer.Persistent, Some(true));
    assert_eq!(unit.Timer.RandomizedDelaySec.as_deref(), Some("30min"));
    assert_eq!(unit.activates("backup.timer"), "backup.service");
}

#[test]
fn test_load_container() {
    let unit: ContainerUnit = load_unit(fixture("web.container")).unwrap();
    assert_eq!(unit.Container.Image, "docker.io/library/nginx:1.25");
    assert_eq!(unit.Container.ContainerName.as_deref(), Some("web"));
    assert_eq!(unit.Container.PublishPort, vec!["8080:80", "8443:443"]);
    assert_eq!(unit.Container.Label, vec!["app=web"]);
    assert_eq!(unit.Container.Pull, Some(PullPolicy::Missing));
    assert_eq!(unit.Container.AutoUpdate, Some(AutoUpdatePolicy::Registry));
    let service = unit.Service.as_ref().unwrap();
    assert_eq!(service.restart(), ServiceRestart::Always);
    assert_eq!(service.TimeoutStartSec.as_deref(), Some("900"));
}

#[test]
fn test_document_round_trip() {
    for name in FIXTURES {
        let text = libtests::read_test_unit(name).unwrap();
        let doc = parse(&text).unwrap();
        let out = serialize(&doc);
        assert_eq!(parse(&out).unwrap(), doc, "{}", name);
        assert_eq!(serialize(&parse(&out).unwrap()), out, "{}", name);
    }
}

#[test]
fn test_typed_round_trip() {
    let unit: ServiceUnit = load_unit(fixture("deployer.service")).unwrap();
    assert_eq!(ServiceUnit::parse_unit(&unit.to_unit_string()).unwrap(), unit);

    let unit: TimerUnit = load_unit(fixture("backup.timer")).unwrap();
    assert_eq!(TimerUnit::parse_unit(&unit.to_unit_string()).unwrap(), unit);

    let unit: ContainerUnit = load_unit(fixture("web.container")).unwrap();
    assert_eq!(ContainerUnit::parse_unit(&unit.to_unit_string()).unwrap(), unit);
}

#[test]
fn test_repeated_boolean_is_rejected() {
    let err = load_unit::<ServiceUnit, _>(fixture("broken.service")).unwrap_err();
    match err {
        Error::Parse { path, source } => {
            assert!(path.ends_with("broken.service"));
            assert!(matches!(
                source,
                unit_parser::error::Error::RepeatedNonStringKeyError { ref key, ref section }
                    if key == "PrivateTmp" && section == "Service"
            ));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_reopened_sections() {
    let unit: ServiceUnit = load_unit(fixture("reopened.service")).unwrap();
    let section = unit.Unit.unwrap();
    assert_eq!(section.Description.as_deref(), Some("reopened"));
    assert_eq!(section.After, vec!["basic.target"]);

    let mut options = ParserOptions::default();
    options.Parser.AllowReopenedSections = false;
    let mut loader = UnitLoader::new(options);
    let err = loader
        .load::<ServiceUnit, _>(fixture("reopened.service"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Parse {
            source: unit_parser::error::Error::ReopenedSectionError { line: 7, .. },
            ..
        }
    ));
}

#[test]
fn test_ambiguous_boolean_diagnostic() {
    let mut loader = UnitLoader::default();
    let unit: ServiceUnit = loader.load(fixture("ambiguous.service")).unwrap();
    assert_eq!(unit.Service.RemainAfterExit, Some(true));
    assert_eq!(loader.diagnostics().len(), 1);
    assert_eq!(loader.diagnostics()[0].1.line, 3);
    assert_eq!(loader.diagnostics()[0].1.token, "1");

    let mut options = ParserOptions::default();
    options.Parser.WarnAmbiguousBooleans = false;
    let mut loader = UnitLoader::new(options);
    let _: ServiceUnit = loader.load(fixture("ambiguous.service")).unwrap();
    assert!(loader.diagnostics().is_empty());
}

#[test]
fn test_write_unit() {
    let mut unit = ServiceUnit::default();
    unit.set_property("Unit", "Description", "written").unwrap();
    unit.set_property("Service", "ExecStart", "/usr/bin/env true")
        .unwrap();
    unit.set_property("Service", "Restart", "on-abort").unwrap();

    let path = std::env::temp_dir().join(format!("sysunit-{}.service", std::process::id()));
    write_unit(&unit, &path).unwrap();
    let loaded: ServiceUnit = load_unit(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, unit);
    assert_eq!(loaded.Service.restart(), ServiceRestart::OnAbort);
}

#[test]
fn test_end_to_end_document() {
    let doc = parse(
        "[Unit]
Description=deployer
After=network.target

[Service]
ExecPreStart=/opt/d/agent start-1
ExecPreStart=/opt/d/agent start-2
PrivateTmp=yes",
    )
    .unwrap();
    assert_eq!(doc.get("Unit", "Description"), Some(&Value::from("deployer")));
    assert_eq!(
        doc.get("Service", "ExecPreStart").and_then(Value::as_strings),
        Some(vec!["/opt/d/agent start-1", "/opt/d/agent start-2"])
    );
    assert_eq!(doc.get("Service", "PrivateTmp"), Some(&Value::Bool(true)));

    // the typed layer does not know this key
    let err = ServiceUnit::from_document(&doc).unwrap_err();
    assert!(matches!(
        err,
        unit_parser::error::Error::UnknownEntryError { ref key, .. } if key == "ExecPreStart"
    ));
}
