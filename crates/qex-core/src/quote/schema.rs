//! The quote field schema: every output column with its extraction rules.

use lazy_static::lazy_static;
use regex::Regex;

use super::rules::fields::rule;

/// How a field's value is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Ordered regex rules over the document text.
    Pattern,
    /// Pattern extraction piped through date normalization.
    Date,
    /// The input filename, verbatim.
    Filename,
    /// A fixed value, never derived from the document.
    Constant(&'static str),
}

/// One schema entry: output column plus its extraction recipe.
#[derive(Debug)]
pub struct FieldSpec {
    /// Output column name.
    pub name: &'static str,
    /// Extraction rules, tried in order.
    pub rules: Vec<Regex>,
    /// Value used when no rule matches.
    pub default: &'static str,
    /// Extraction strategy.
    pub kind: FieldKind,
}

impl FieldSpec {
    fn pattern(name: &'static str, patterns: &[&str]) -> Self {
        Self::with_default(name, patterns, "")
    }

    fn with_default(name: &'static str, patterns: &[&str], default: &'static str) -> Self {
        Self {
            name,
            rules: patterns.iter().map(|p| rule(p)).collect(),
            default,
            kind: FieldKind::Pattern,
        }
    }

    fn date(name: &'static str, patterns: &[&str]) -> Self {
        Self {
            kind: FieldKind::Date,
            ..Self::pattern(name, patterns)
        }
    }

    fn filename(name: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
            default: "",
            kind: FieldKind::Filename,
        }
    }

    fn constant(name: &'static str, value: &'static str) -> Self {
        Self {
            name,
            rules: Vec::new(),
            default: value,
            kind: FieldKind::Constant(value),
        }
    }
}

/// Immutable extraction schema, built once and passed to the mapper.
#[derive(Debug)]
pub struct QuoteSchema {
    specs: Vec<FieldSpec>,
}

impl QuoteSchema {
    /// The process-wide schema instance.
    pub fn global() -> &'static QuoteSchema {
        &QUOTE_SCHEMA
    }

    /// Schema entries in display order.
    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    fn build() -> Self {
        let specs = vec![
            FieldSpec::pattern(
                "ReferralManagerCode",
                &[
                    r"Referral\s*Manager\s*Code[:\s]+([A-Z0-9]+)",
                    r"Manager\s*Code[:\s]+([A-Z0-9]+)",
                ],
            ),
            FieldSpec::pattern(
                "ReferralManager",
                &[
                    r"Referral\s*Manager[:\s]+([^\n]+)",
                    r"Account\s*Manager[:\s]+([^\n]+)",
                ],
            ),
            // First email anywhere in the document.
            FieldSpec::pattern(
                "ReferralEmail",
                &[r"([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})"],
            ),
            FieldSpec::pattern("Brand", &[r"Brand[:\s]+([^\n]+)"]),
            // The bare QT token rule has no capture group; the whole
            // match is the value.
            FieldSpec::pattern(
                "QuoteNumber",
                &[
                    r"Quote\s*#?[:\s]+([A-Z0-9-]+)",
                    r"Quote\s*Number[:\s]+([A-Z0-9-]+)",
                    r"QT[0-9]+",
                ],
            ),
            FieldSpec::pattern(
                "QuoteVersion",
                &[r"Version[:\s]+([0-9.]+)", r"Rev[:\s]+([0-9.]+)"],
            ),
            FieldSpec::date(
                "QuoteDate",
                &[r"Quote\s*Date[:\s]+([0-9/\-]+)", r"Date[:\s]+([0-9/\-]+)"],
            ),
            FieldSpec::date(
                "QuoteValidDate",
                &[
                    r"Valid\s*(?:Until|Through|Date)[:\s]+([0-9/\-]+)",
                    r"Expir(?:es|ation)[:\s]+([0-9/\-]+)",
                ],
            ),
            FieldSpec::pattern(
                "Customer Number/ID",
                &[
                    r"Customer\s*(?:Number|ID|#)[:\s]+([A-Z0-9-]+)",
                    r"Account\s*#[:\s]+([A-Z0-9-]+)",
                ],
            ),
            FieldSpec::pattern(
                "Company",
                &[
                    r"Company[:\s]+([^\n]+)",
                    r"Bill\s*To[:\s]+([^\n]+)",
                    r"Customer[:\s]+([^\n]+)",
                ],
            ),
            FieldSpec::pattern(
                "Address",
                &[r"Address[:\s]+([^\n]+)", r"Street[:\s]+([^\n]+)"],
            ),
            FieldSpec::pattern("County", &[r"County[:\s]+([^\n]+)"]),
            FieldSpec::pattern("City", &[r"City[:\s]+([^\n,]+)"]),
            FieldSpec::pattern(
                "State",
                &[r"State[:\s]+([A-Z]{2})", r",\s*([A-Z]{2})\s+\d{5}"],
            ),
            FieldSpec::pattern(
                "ZipCode",
                &[
                    r"Zip\s*Code[:\s]+([0-9-]+)",
                    r"ZIP[:\s]+([0-9-]+)",
                    r"\b(\d{5}(?:-\d{4})?)\b",
                ],
            ),
            FieldSpec::with_default("Country", &[r"Country[:\s]+([^\n]+)"], "USA"),
            FieldSpec::pattern(
                "FirstName",
                &[r"First\s*Name[:\s]+([^\n]+)", r"Contact[:\s]+([A-Z][a-z]+)"],
            ),
            FieldSpec::pattern("LastName", &[r"Last\s*Name[:\s]+([^\n]+)"]),
            FieldSpec::pattern(
                "ContactEmail",
                &[r"Email[:\s]+([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})"],
            ),
            FieldSpec::pattern(
                "ContactPhone",
                &[
                    r"Phone[:\s]+([0-9\-\(\)\s]+)",
                    r"Tel[:\s]+([0-9\-\(\)\s]+)",
                ],
            ),
            FieldSpec::pattern(
                "Webaddress",
                &[r"(?:www\.|https?://)([^\s]+)", r"Website[:\s]+([^\n]+)"],
            ),
            FieldSpec::pattern(
                "item_id",
                &[
                    r"Item\s*(?:Number|ID|#)[:\s]+([A-Z0-9-]+)",
                    r"SKU[:\s]+([A-Z0-9-]+)",
                ],
            ),
            FieldSpec::pattern(
                "item_desc",
                &[r"Description[:\s]+([^\n]+)", r"Item[:\s]+([^\n]+)"],
            ),
            FieldSpec::pattern(
                "UOM",
                &[r"(?:UOM|Unit)[:\s]+([A-Z]+)", r"\b(EA|EACH|BOX|CS|CASE)\b"],
            ),
            FieldSpec::pattern(
                "Quantity",
                &[r"Qty[:\s]+([0-9,]+)", r"Quantity[:\s]+([0-9,]+)"],
            ),
            FieldSpec::pattern(
                "Unit Price",
                &[
                    r"Unit\s*Price[:\s]+\$?([0-9,.]+)",
                    r"Price[:\s]+\$?([0-9,.]+)",
                ],
            ),
            FieldSpec::pattern("List Price", &[r"List\s*Price[:\s]+\$?([0-9,.]+)"]),
            FieldSpec::pattern(
                "TotalSales",
                &[r"Total[:\s]+\$?([0-9,.]+)", r"Amount[:\s]+\$?([0-9,.]+)"],
            ),
            FieldSpec::pattern(
                "Manufacturer_ID",
                &[r"Manufacturer\s*(?:ID|#)[:\s]+([A-Z0-9-]+)"],
            ),
            // Brand doubles as a fallback here; quote documents rarely
            // distinguish brand from manufacturer.
            FieldSpec::pattern(
                "manufacturer_Name",
                &[r"Manufacturer[:\s]+([^\n]+)", r"Brand[:\s]+([^\n]+)"],
            ),
            FieldSpec::pattern(
                "Writer Name",
                &[
                    r"(?:Prepared|Written)\s*By[:\s]+([^\n]+)",
                    r"Sales\s*Rep[:\s]+([^\n]+)",
                ],
            ),
            FieldSpec::pattern(
                "CustomerPONumber",
                &[
                    r"(?:Customer\s*)?PO\s*#?[:\s]+([A-Z0-9-]+)",
                    r"Purchase\s*Order[:\s]+([A-Z0-9-]+)",
                ],
            ),
            FieldSpec::filename("PDF"),
            FieldSpec::constant("DemoQuote", "No"),
            FieldSpec::pattern(
                "Duns",
                &[r"DUNS[:\s]+([0-9-]+)", r"D-U-N-S[:\s]+([0-9-]+)"],
            ),
            FieldSpec::pattern("SIC", &[r"SIC[:\s]+([0-9]+)"]),
            FieldSpec::pattern("NAICS", &[r"NAICS[:\s]+([0-9]+)"]),
            FieldSpec::pattern(
                "LineOfBusiness",
                &[
                    r"Line\s*of\s*Business[:\s]+([^\n]+)",
                    r"Industry[:\s]+([^\n]+)",
                ],
            ),
            FieldSpec::pattern(
                "LinkedinProfile",
                &[r"linkedin\.com/(?:in|company)/([^\s]+)"],
            ),
            // Placeholder for data not derivable from the document.
            FieldSpec::constant("PhoneResearched", ""),
            FieldSpec::pattern("PhoneSupplied", &[r"Phone[:\s]+([0-9\-\(\)\s]+)"]),
            FieldSpec::pattern("ParentName", &[r"Parent\s*Company[:\s]+([^\n]+)"]),
        ];

        Self { specs }
    }
}

lazy_static! {
    static ref QUOTE_SCHEMA: QuoteSchema = QuoteSchema::build();
}
