//! Output record for one extracted quote document.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Number of output columns.
pub const FIELD_COUNT: usize = 42;

/// Canonical output column names, in display order.
///
/// These keys are the downstream import contract: exact spelling,
/// casing and spacing, and every record carries all of them.
pub static FIELD_NAMES: [&str; FIELD_COUNT] = [
    "ReferralManagerCode",
    "ReferralManager",
    "ReferralEmail",
    "Brand",
    "QuoteNumber",
    "QuoteVersion",
    "QuoteDate",
    "QuoteValidDate",
    "Customer Number/ID",
    "Company",
    "Address",
    "County",
    "City",
    "State",
    "ZipCode",
    "Country",
    "FirstName",
    "LastName",
    "ContactEmail",
    "ContactPhone",
    "Webaddress",
    "item_id",
    "item_desc",
    "UOM",
    "Quantity",
    "Unit Price",
    "List Price",
    "TotalSales",
    "Manufacturer_ID",
    "manufacturer_Name",
    "Writer Name",
    "CustomerPONumber",
    "PDF",
    "DemoQuote",
    "Duns",
    "SIC",
    "NAICS",
    "LineOfBusiness",
    "LinkedinProfile",
    "PhoneResearched",
    "PhoneSupplied",
    "ParentName",
];

/// One fully-populated output row.
///
/// Every record holds exactly [`FIELD_COUNT`] string values aligned
/// with [`FIELD_NAMES`]; unmatched fields are empty strings, never
/// absent. Records are built once by the mapper and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    values: Vec<String>,
}

impl QuoteRecord {
    pub(crate) fn from_values(values: Vec<String>) -> Self {
        debug_assert_eq!(values.len(), FIELD_COUNT);
        Self { values }
    }

    /// Look up a value by column name.
    pub fn get(&self, field: &str) -> Option<&str> {
        FIELD_NAMES
            .iter()
            .position(|name| *name == field)
            .map(|idx| self.values[idx].as_str())
    }

    /// Iterate `(column name, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        FIELD_NAMES
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Values in display order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The extracted quote number (empty when none was found).
    pub fn quote_number(&self) -> &str {
        self.get("QuoteNumber").unwrap_or_default()
    }
}

impl Serialize for QuoteRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Serialized as a map so JSON output keeps the column order.
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> QuoteRecord {
        let mut values = vec![String::new(); FIELD_COUNT];
        values[4] = "QT987654".to_string();
        QuoteRecord::from_values(values)
    }

    #[test]
    fn test_field_names_are_unique() {
        let mut names: Vec<_> = FIELD_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FIELD_COUNT);
    }

    #[test]
    fn test_get_by_name() {
        let record = sample();
        assert_eq!(record.get("QuoteNumber"), Some("QT987654"));
        assert_eq!(record.get("Company"), Some(""));
        assert_eq!(record.get("NoSuchField"), None);
    }

    #[test]
    fn test_quote_number_accessor() {
        assert_eq!(sample().quote_number(), "QT987654");
    }

    #[test]
    fn test_iter_preserves_display_order() {
        let record = sample();
        let names: Vec<_> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names.as_slice(), &FIELD_NAMES[..]);
    }

    #[test]
    fn test_json_keeps_column_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let referral = json.find("ReferralManagerCode").unwrap();
        let quote = json.find("QuoteNumber").unwrap();
        let parent = json.find("ParentName").unwrap();
        assert!(referral < quote && quote < parent);
    }
}
