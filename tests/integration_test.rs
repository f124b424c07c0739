/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use test_utilities::mocks::*;
use nessus_file_reader::prelude::*;

const SAMPLE: &str = include_str!("fixtures/sample.nessus");

fn all_sections() -> InspectSections {
    InspectSections {
        file_size: true,
        scan_summary: true,
        policy_summary: true,
        scan_file_source: true,
        hosts: true,
    }
}

#[test]
fn test_inspect_scan_summary() {
    let reader = MockScanFileReader::new().with_file("/scans/sample.nessus", SAMPLE);
    let progress_reporter = MockProgressReporter::new();
    let use_case = InspectScanUseCase::new(reader, progress_reporter.clone());

    let request = InspectRequest::new(vec![PathBuf::from("/scans/sample.nessus")], all_sections());
    let response = use_case.execute(request).unwrap();

    let summary = &response.model.scan_summaries[0];
    assert_eq!(summary.file_name, "sample.nessus");
    assert_eq!(summary.report_name.as_deref(), Some("Weekly internal"));
    assert_eq!(summary.target_hosts, Some(4));
    assert_eq!(summary.scanned_hosts, 3);
    assert_eq!(summary.not_scanned_hosts, Some(1));
    assert_eq!(summary.credentialed_hosts, Some(2));
    assert_eq!(summary.credentialed_databases, 1);
    assert_eq!(
        (summary.critical, summary.high, summary.medium, summary.low, summary.none),
        (1, 2, 1, 1, 7)
    );
    assert_eq!(summary.scan_start.as_deref(), Some("2021-02-25 10:00:00"));
    assert_eq!(summary.scan_end.as_deref(), Some("2021-02-25 11:15:00"));
    assert_eq!(summary.elapsed.as_deref(), Some("1:15:00"));

    let messages = progress_reporter.get_messages();
    assert!(messages.contains(&"📖 Loading scan file: /scans/sample.nessus".to_string()));
    assert!(messages.contains(&"✅ Detected 3 host(s)".to_string()));
}

#[test]
fn test_inspect_policy_summary_and_source() {
    let reader = MockScanFileReader::new().with_file("/scans/sample.nessus", SAMPLE);
    let use_case = InspectScanUseCase::new(reader, MockProgressReporter::new());

    let response = use_case
        .execute(InspectRequest::new(
            vec![PathBuf::from("/scans/sample.nessus")],
            all_sections(),
        ))
        .unwrap();

    let policy = &response.model.policy_summaries[0];
    assert_eq!(policy.policy_name.as_deref(), Some("Internal network"));
    assert_eq!(policy.max_hosts.as_deref(), Some("30"));
    assert_eq!(policy.max_checks.as_deref(), Some("4"));
    assert_eq!(policy.checks_timeout.as_deref(), Some("5"));
    assert_eq!(policy.reverse_lookup.as_deref(), Some("no"));
    assert_eq!(policy.plugins_number, Some(9));
    assert_eq!(policy.login.as_deref(), Some("CORP\\administrator"));

    assert_eq!(response.model.scan_file_sources[0].source, "Nessus");
}

#[test]
fn test_inspect_hosts() {
    let reader = MockScanFileReader::new().with_file("/scans/sample.nessus", SAMPLE);
    let use_case = InspectScanUseCase::new(reader, MockProgressReporter::new());

    let sections = InspectSections {
        hosts: true,
        ..Default::default()
    };
    let response = use_case
        .execute(InspectRequest::new(vec![PathBuf::from("/scans/sample.nessus")], sections))
        .unwrap();

    let hosts = &response.model.hosts;
    assert_eq!(hosts.len(), 3);

    let windows = &hosts[0];
    assert_eq!(windows.name, "192.168.1.10");
    assert_eq!(windows.hostname, "win-srv01");
    assert_eq!(windows.fqdn.as_deref(), Some("win-srv01.corp.local"));
    assert_eq!(windows.operating_system, "Microsoft Windows Server 2019");
    assert_eq!(windows.netbios_computer_name, "win-srv01");
    assert_eq!(windows.netbios_domain_name, "corp");
    assert_eq!(windows.scanner_ip.as_deref(), Some("192.168.1.250"));
    assert_eq!(windows.login_used.as_deref(), Some("CORP\\administrator"));
    assert_eq!(windows.credentialed_checks, "yes, as 'CORP\\administrator' via SMB");
    assert_eq!(windows.credentialed_checks_db, "no");
    assert_eq!(windows.plugins, 6);
    assert_eq!((windows.critical, windows.high, windows.none), (1, 1, 4));
    assert_eq!(windows.compliance_plugins, 2);
    assert_eq!(windows.compliance_passed, 1);
    assert_eq!(windows.compliance_failed, 1);
    assert_eq!(windows.compliance_warning, 0);
    assert_eq!(windows.elapsed.as_deref(), Some("0:30:00"));

    let linux = &hosts[1];
    assert_eq!(linux.credentialed_checks, "no");
    assert_eq!(linux.operating_system, "Linux Kernel 5.4 on Ubuntu 20.04");
    assert_eq!(linux.hostname, "");
    assert_eq!(linux.netbios_computer_name, "");

    let database = &hosts[2];
    assert_eq!(database.ip.as_deref(), Some("192.168.1.20"));
    assert_eq!(database.login_used.as_deref(), Some("oracle"));
    assert_eq!(database.credentialed_checks_db, "yes, based on plugin id 91827");
    assert_eq!(database.elapsed.as_deref(), Some("1:05:00"));
}

#[test]
fn test_inspect_multiple_files_keeps_order() {
    let reader = MockScanFileReader::new()
        .with_file("/scans/first.nessus", SAMPLE)
        .with_file("/scans/second.nessus", SAMPLE);
    let progress_reporter = MockProgressReporter::new();
    let use_case = InspectScanUseCase::new(reader, progress_reporter.clone());

    let sections = InspectSections {
        file_size: true,
        ..Default::default()
    };
    let response = use_case
        .execute(InspectRequest::new(
            vec![
                PathBuf::from("/scans/second.nessus"),
                PathBuf::from("/scans/first.nessus"),
            ],
            sections,
        ))
        .unwrap();

    let names: Vec<&str> = response
        .model
        .files
        .iter()
        .map(|file| file.file_name.as_str())
        .collect();
    assert_eq!(names, vec!["second.nessus", "first.nessus"]);
    assert_eq!(response.model.files[0].size, SAMPLE.len() as u64);

    let messages = progress_reporter.get_messages();
    assert!(messages.contains(&"Progress: 0/2 - second.nessus".to_string()));
    assert!(messages.contains(&"Progress: 2/2".to_string()));
}

#[test]
fn test_inspect_missing_file_fails() {
    let use_case = InspectScanUseCase::new(MockScanFileReader::new(), MockProgressReporter::new());

    let err = use_case
        .execute(InspectRequest::new(
            vec![PathBuf::from("/scans/missing.nessus")],
            all_sections(),
        ))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<NessusError>(),
        Some(NessusError::ScanFileNotFound { .. })
    ));
}

#[test]
fn test_split_report_writes_parseable_parts() {
    let reader = MockScanFileReader::new().with_file("/scans/sample.nessus", SAMPLE);
    let part_writer = MockPartWriter::new();
    let progress_reporter = MockProgressReporter::new();
    let use_case = SplitReportUseCase::new(reader, part_writer.clone(), progress_reporter.clone());

    let response = use_case
        .execute(SplitRequest::new(PathBuf::from("/scans/sample.nessus"), 2))
        .unwrap();

    assert_eq!(response.host_count, 3);
    assert_eq!(
        response.parts,
        vec![
            PathBuf::from("/scans/sample_part1.nessus"),
            PathBuf::from("/scans/sample_part2.nessus"),
        ]
    );

    let written = part_writer.written();
    let first = ScanDocument::parse(&written[0].1).unwrap();
    let second = ScanDocument::parse(&written[1].1).unwrap();
    assert_eq!(first.scanned_host_names(), vec!["192.168.1.10", "192.168.1.11"]);
    assert_eq!(second.scanned_host_names(), vec!["db01.corp.local"]);

    // Policy and report attributes survive in every part
    assert_eq!(second.policy_name(), Some("Internal network"));
    assert_eq!(second.report_name(), Some("Weekly internal"));
    assert_eq!(second.target_host_count(), Some(4));

    assert!(progress_reporter
        .get_messages()
        .contains(&"Completed: ✅ Split 3 host(s) into 2 file(s) of at most 2 host(s)".to_string()));
}

#[test]
fn test_split_report_stops_on_write_failure() {
    let reader = MockScanFileReader::new().with_file("/scans/sample.nessus", SAMPLE);
    let part_writer = MockPartWriter::failing_on(2);
    let use_case = SplitReportUseCase::new(reader, part_writer.clone(), MockProgressReporter::new());

    let err = use_case
        .execute(SplitRequest::new(PathBuf::from("/scans/sample.nessus"), 1))
        .unwrap_err();

    assert!(err.to_string().contains("disk full"));
    assert_eq!(part_writer.written().len(), 1);
}
