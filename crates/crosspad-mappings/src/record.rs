use ahash::AHashMap;
use thiserror::Error;

/// Error type for unusable mapping lines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingError {
    #[error("empty mapping line")]
    Empty,
    #[error("mapping line has no name field: {0}")]
    MissingName(String),
}

/// One parsed `guid,name,field:code,...` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRecord {
    /// Stable device identifier, the line's first field.
    pub guid: String,
    /// Human-readable device name, the second field.
    pub name: String,
    entries: AHashMap<String, String>,
}

impl MappingRecord {
    /// Parse a single line.
    ///
    /// A line needs at least a guid and a name to be usable; everything
    /// after that is best-effort. Pairs without a `:`, or with an empty
    /// field or code, are dropped and parsing continues.
    pub fn parse(line: &str) -> Result<Self, MappingError> {
        let line = line.trim().trim_end_matches(',');
        if line.is_empty() {
            return Err(MappingError::Empty);
        }

        let mut parts = line.split(',');
        let guid = parts.next().unwrap_or_default().trim();
        if guid.is_empty() {
            return Err(MappingError::Empty);
        }
        let name = match parts.next() {
            Some(name) if !name.trim().is_empty() => name.trim(),
            _ => return Err(MappingError::MissingName(guid.to_string())),
        };

        let mut entries = AHashMap::new();
        for pair in parts {
            let Some((field, code)) = pair.split_once(':') else {
                log::debug!("skipping mapping field without colon: {pair}");
                continue;
            };
            let field = field.trim();
            let code = code.trim();
            if field.is_empty() || code.is_empty() {
                log::debug!("skipping incomplete mapping field: {pair}");
                continue;
            }
            entries.insert(field.to_string(), code.to_string());
        }

        Ok(Self {
            guid: guid.to_string(),
            name: name.to_string(),
            entries,
        })
    }

    /// Platform code bound to a logical field, if present.
    pub fn code(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    /// Whether the record binds a logical field at all.
    pub fn has_field(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Number of parsed field bindings.
    pub fn field_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_record() {
        let record = MappingRecord::parse(
            "030000004c050000c405000011010000,PS4 Controller,\
             a:b1,b:b2,x:b0,y:b3,leftx:a0,lefty:a1,dpup:h0.1",
        )
        .unwrap();
        assert_eq!(record.guid, "030000004c050000c405000011010000");
        assert_eq!(record.name, "PS4 Controller");
        assert_eq!(record.field_count(), 7);
        assert_eq!(record.code("dpup"), Some("h0.1"));
    }

    #[test]
    fn malformed_pairs_are_skipped_not_fatal() {
        let record = MappingRecord::parse(
            "guid0,Odd Pad,a:b0,garbage,:b9,x:,y:b3",
        )
        .unwrap();
        // Only the two well-formed pairs survive
        assert_eq!(record.field_count(), 2);
        assert_eq!(record.code("a"), Some("b0"));
        assert_eq!(record.code("y"), Some("b3"));
        assert!(!record.has_field("x"));
    }

    #[test]
    fn record_without_name_is_an_error() {
        assert_eq!(
            MappingRecord::parse("lonely-guid"),
            Err(MappingError::MissingName("lonely-guid".to_string()))
        );
        assert_eq!(MappingRecord::parse("   "), Err(MappingError::Empty));
    }

    #[test]
    fn name_only_record_has_no_fields() {
        let record = MappingRecord::parse("guid1,Bare Pad").unwrap();
        assert_eq!(record.field_count(), 0);
        assert!(!record.has_field("a"));
    }

    #[test]
    fn trailing_comma_is_tolerated() {
        let record = MappingRecord::parse("guid2,Pad,a:b0,").unwrap();
        assert_eq!(record.field_count(), 1);
    }
}
