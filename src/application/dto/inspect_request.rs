use std::path::PathBuf;

/// Sections a query can ask for; each one becomes a table (or JSON array)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectSections {
    /// File name and size
    pub file_size: bool,
    /// Host counts, credentialed hosts, risk totals and scan window
    pub scan_summary: bool,
    /// Policy name, limits, plugin count and configured login
    pub policy_summary: bool,
    /// Producing product (Nessus, Tenable.sc, Tenable.io)
    pub scan_file_source: bool,
    /// One row per report host
    pub hosts: bool,
}

impl InspectSections {
    pub fn is_empty(&self) -> bool {
        *self == InspectSections::default()
    }

    /// True if any requested section needs the parsed document,
    /// not just the file metadata
    pub fn needs_document(&self) -> bool {
        self.scan_summary || self.policy_summary || self.scan_file_source || self.hosts
    }
}

/// InspectRequest - request DTO for read-only queries over scan files
#[derive(Debug, Clone)]
pub struct InspectRequest {
    /// Scan files to query, in output order
    pub files: Vec<PathBuf>,
    pub sections: InspectSections,
}

impl InspectRequest {
    pub fn new(files: Vec<PathBuf>, sections: InspectSections) -> Self {
        Self { files, sections }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_default_is_empty() {
        assert!(InspectSections::default().is_empty());
        assert!(!InspectSections::default().needs_document());
    }

    #[test]
    fn test_file_size_alone_does_not_need_document() {
        let sections = InspectSections {
            file_size: true,
            ..Default::default()
        };
        assert!(!sections.is_empty());
        assert!(!sections.needs_document());

        let sections = InspectSections {
            hosts: true,
            ..Default::default()
        };
        assert!(sections.needs_document());
    }
}
