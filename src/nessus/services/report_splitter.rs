use crate::shared::error::NessusError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

const REPORT_OPEN: &str = "<Report ";
const REPORT_CLOSE: &str = "</Report>";
const HOST_OPEN: &str = "<ReportHost";

/// Splits a serialized scan file into parts of at most `batch_size` hosts
///
/// Works on the literal text: every part is the source with its
/// `ReportHost` blocks replaced by one consecutive batch. Everything outside
/// the host blocks (XML declaration, Policy section, the Report opening tag
/// with its namespace declarations, closing tags) is copied byte for byte,
/// and so is every host block.
///
/// A file without hosts yields a single part equal to the source.
///
/// # Errors
/// `Validation` for a zero batch size, `MalformedReport` when no complete
/// `<Report ...>...</Report>` section can be located.
pub fn split(raw: &str, batch_size: usize) -> Result<Vec<String>> {
    if batch_size == 0 {
        return Err(NessusError::Validation {
            message: "batch size must be greater than 0".to_string(),
        }
        .into());
    }

    let layout = ReportLayout::locate(raw)?;
    let hosts = layout.host_blocks();
    if hosts.is_empty() {
        return Ok(vec![raw.to_string()]);
    }

    let parts = hosts
        .chunks(batch_size)
        .map(|batch| {
            let body_len: usize = batch.iter().map(|block| block.len()).sum();
            let mut part = String::with_capacity(
                layout.prefix.len() + layout.lead.len() + body_len + layout.suffix.len(),
            );
            part.push_str(layout.prefix);
            part.push_str(layout.lead);
            batch.iter().for_each(|block| part.push_str(block));
            part.push_str(layout.suffix);
            part
        })
        .collect();
    Ok(parts)
}

/// Number of `ReportHost` blocks in a serialized scan file
pub fn count_hosts(raw: &str) -> Result<usize> {
    Ok(ReportLayout::locate(raw)?.host_starts().len())
}

/// Path of the `number`-th part (1-based): `<stem>_part<number>` plus the
/// original extension, next to the input
pub fn part_path(input: &Path, number: usize) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(extension) => format!("{}_part{}.{}", stem, number, extension.to_string_lossy()),
        None => format!("{}_part{}", stem, number),
    };
    input.with_file_name(name)
}

/// Text regions of a serialized report
///
/// `prefix` runs up to and including the Report opening tag, `body` is the
/// content of the Report element and `suffix` starts at `</Report>`.
struct ReportLayout<'a> {
    prefix: &'a str,
    body: &'a str,
    suffix: &'a str,
    /// Text of the body before the first host (usually a newline)
    lead: &'a str,
}

impl<'a> ReportLayout<'a> {
    fn locate(raw: &'a str) -> Result<Self> {
        let report_start = raw.find(REPORT_OPEN).ok_or_else(|| NessusError::MalformedReport {
            reason: "no <Report> element found".to_string(),
        })?;
        let open_end = Self::tag_end(raw, report_start).ok_or_else(|| {
            NessusError::MalformedReport {
                reason: "<Report> opening tag is not terminated".to_string(),
            }
        })?;
        let report_end = raw
            .rfind(REPORT_CLOSE)
            .filter(|end| *end >= open_end)
            .ok_or_else(|| NessusError::MalformedReport {
                reason: "no </Report> closing tag found".to_string(),
            })?;

        let body = &raw[open_end..report_end];
        let lead_end = Self::find_host_starts(body)
            .first()
            .copied()
            .unwrap_or(body.len());
        Ok(Self {
            prefix: &raw[..open_end],
            body,
            suffix: &raw[report_end..],
            lead: &body[..lead_end],
        })
    }

    /// Offset just past the `>` closing the tag that starts at `start`;
    /// a `>` inside a quoted attribute value does not end the tag
    fn tag_end(raw: &str, start: usize) -> Option<usize> {
        let mut quote: Option<u8> = None;
        for (offset, byte) in raw.as_bytes()[start..].iter().enumerate() {
            match quote {
                Some(open) if *byte == open => quote = None,
                Some(_) => {}
                None if *byte == b'"' || *byte == b'\'' => quote = Some(*byte),
                None if *byte == b'>' => return Some(start + offset + 1),
                None => {}
            }
        }
        None
    }

    /// Offsets of `<ReportHost ` / `<ReportHost>` in the body;
    /// `<ReportHostX` style names are not host starts
    fn find_host_starts(body: &str) -> Vec<usize> {
        body.match_indices(HOST_OPEN)
            .map(|(offset, _)| offset)
            .filter(|offset| {
                matches!(
                    body.as_bytes().get(offset + HOST_OPEN.len()),
                    Some(b' ' | b'>' | b'\t' | b'\r' | b'\n')
                )
            })
            .collect()
    }

    fn host_starts(&self) -> Vec<usize> {
        Self::find_host_starts(self.body)
    }

    /// Host blocks in document order; the last one runs to the end of the body,
    /// so whitespace between hosts stays with the preceding host
    fn host_blocks(&self) -> Vec<&'a str> {
        let starts = self.host_starts();
        starts
            .iter()
            .enumerate()
            .map(|(index, start)| {
                let end = starts.get(index + 1).copied().unwrap_or(self.body.len());
                &self.body[*start..end]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: &str = "<Policy><policyName>Basic &amp; Safe</policyName>\n<Preferences><ServerPreferences><preference><name>TARGET</name><value>10.0.0.1-10.0.0.10</value></preference></ServerPreferences></Preferences></Policy>";

    fn host(n: usize) -> String {
        format!(
            "<ReportHost name=\"10.0.0.{n}\"><HostProperties><tag name=\"host-ip\">10.0.0.{n}</tag></HostProperties>\n<ReportItem pluginID=\"19506\"><plugin_output>It&apos;s &quot;host {n}&quot;</plugin_output></ReportItem>\n</ReportHost>\n"
        )
    }

    fn document(hosts: usize) -> String {
        let body: String = (1..=hosts).map(host).collect();
        format!(
            "<?xml version=\"1.0\" ?>\n<NessusClientData_v2>\n{POLICY}\n<Report name=\"weekly\" xmlns:cm=\"http://www.nessus.org/cm\">\n{body}</Report>\n</NessusClientData_v2>\n"
        )
    }

    fn host_blocks(part: &str) -> Vec<String> {
        ReportLayout::locate(part)
            .unwrap()
            .host_blocks()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_split_ten_hosts_in_batches_of_three() {
        let source = document(10);
        let parts = split(&source, 3).unwrap();

        let counts: Vec<usize> = parts.iter().map(|p| count_hosts(p).unwrap()).collect();
        assert_eq!(counts, vec![3, 3, 3, 1]);

        let rejoined: Vec<String> = parts.iter().flat_map(|p| host_blocks(p)).collect();
        assert_eq!(rejoined, host_blocks(&source));
        assert_eq!(rejoined.concat(), (1..=10).map(host).collect::<String>());
    }

    #[test]
    fn test_policy_and_report_tag_are_kept_verbatim() {
        let source = document(10);
        for part in split(&source, 3).unwrap() {
            assert!(part.contains(POLICY));
            assert!(part.starts_with("<?xml version=\"1.0\" ?>\n<NessusClientData_v2>\n"));
            assert!(part.contains("<Report name=\"weekly\" xmlns:cm=\"http://www.nessus.org/cm\">"));
            assert!(part.ends_with("</Report>\n</NessusClientData_v2>\n"));
        }
    }

    #[test]
    fn test_policy_after_report_is_kept_verbatim() {
        let body: String = (1..=7).map(host).collect();
        let source = format!(
            "<?xml version=\"1.0\" ?>\n<NessusClientData_v2>\n<Report name=\"weekly\">\n{body}</Report>\n{POLICY}\n</NessusClientData_v2>\n"
        );
        let parts = split(&source, 3).unwrap();
        assert_eq!(parts.len(), 3);

        let trailer = format!("</Report>\n{POLICY}\n</NessusClientData_v2>\n");
        for part in &parts {
            assert!(part.ends_with(&trailer));
            assert_eq!(part.matches(POLICY).count(), 1);
        }
        let rejoined: Vec<String> = parts.iter().flat_map(|p| host_blocks(p)).collect();
        assert_eq!(rejoined.concat(), body);
    }

    #[test]
    fn test_report_tag_with_gt_in_attribute() {
        let source = format!(
            "<NessusClientData_v2>\n<Report name=\"a > b\" note='x>y' xmlns:cm=\"http://www.nessus.org/cm\">\n{}{}</Report>\n</NessusClientData_v2>\n",
            host(1),
            host(2)
        );
        let parts = split(&source, 1).unwrap();
        assert_eq!(parts.len(), 2);
        for (index, part) in parts.iter().enumerate() {
            assert!(part.starts_with(
                "<NessusClientData_v2>\n<Report name=\"a > b\" note='x>y' xmlns:cm=\"http://www.nessus.org/cm\">\n<ReportHost "
            ));
            assert_eq!(host_blocks(part), vec![host(index + 1)]);
        }
        assert_eq!(ReportLayout::tag_end("<Report name=\"x\"", 0), None);
    }

    #[test]
    fn test_parts_are_well_formed() {
        let source = document(5);
        for part in split(&source, 2).unwrap() {
            let document = crate::nessus::domain::ScanDocument::parse(&part).unwrap();
            assert!(document.scanned_host_count() <= 2);
            assert_eq!(document.report_name(), Some("weekly"));
        }
    }

    #[test]
    fn test_batch_covering_all_hosts_reproduces_source() {
        let source = document(4);
        assert_eq!(split(&source, 4).unwrap(), vec![source.clone()]);
        assert_eq!(split(&source, 100).unwrap(), vec![source]);
    }

    #[test]
    fn test_no_hosts_yields_one_part() {
        let source = document(0);
        let parts = split(&source, 3).unwrap();
        assert_eq!(parts, vec![source]);
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let err = split(&document(2), 0).unwrap_err();
        assert!(err.to_string().contains("batch size must be greater than 0"));
    }

    #[test]
    fn test_missing_report_is_rejected() {
        let err = split("<NessusClientData_v2><Policy/></NessusClientData_v2>", 5).unwrap_err();
        assert!(err.to_string().contains("no <Report> element found"));

        let err = split("<NessusClientData_v2><Report name=\"x\">", 5).unwrap_err();
        assert!(err.to_string().contains("no </Report> closing tag found"));
    }

    #[test]
    fn test_host_start_requires_tag_boundary() {
        let body = "<ReportHost name=\"a\"></ReportHost><ReportHostInfo/><ReportHost>x</ReportHost>";
        assert_eq!(ReportLayout::find_host_starts(body), vec![0, 51]);
    }

    #[test]
    fn test_part_path() {
        assert_eq!(
            part_path(Path::new("/scans/weekly.nessus"), 2),
            PathBuf::from("/scans/weekly_part2.nessus")
        );
        assert_eq!(
            part_path(Path::new("scan.v2.xml"), 1),
            PathBuf::from("scan.v2_part1.xml")
        );
        assert_eq!(part_path(Path::new("scan"), 3), PathBuf::from("scan_part3"));
    }
}
