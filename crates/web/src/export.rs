//! Spreadsheet export of the lead list.
//!
//! Maps the in-memory lead list to a single-sheet workbook with a styled
//! header row and fixed column widths, matching the layout the sales team
//! already works with. Exporting an empty list is an error, never an empty
//! file.

use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, Workbook, XlsxError};

use leaddesk_core::Lead;

/// Sheet name inside the workbook.
pub const SHEET_NAME: &str = "Leads";

/// Filename prefix; the download is `<prefix>_<YYYY-MM-DD>.xlsx`.
pub const EXPORT_FILE_PREFIX: &str = "leaddesk_leads";

/// Header fill color (sky blue).
const HEADER_FILL: Color = Color::RGB(0x0E_A5_E9);

/// Column headers, in display order.
pub const HEADERS: [&str; 14] = [
    "S.No",
    "Customer Name",
    "Phone",
    "Email",
    "Division",
    "Product Category",
    "Product",
    "Location",
    "Product Description",
    "Area of Interest",
    "Firm Name",
    "Feedback",
    "Remark",
    "Created On",
];

/// Column widths in character units, matching [`HEADERS`] by position.
pub const COLUMN_WIDTHS: [f64; 14] = [
    5.0, 25.0, 15.0, 30.0, 20.0, 25.0, 25.0, 20.0, 40.0, 20.0, 20.0, 30.0, 30.0, 22.0,
];

/// Errors that can occur while exporting.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// There are no leads to export; no file is produced.
    #[error("No leads to export.")]
    NoLeads,

    /// The spreadsheet library rejected the workbook.
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Build the download filename for an export generated on `date`.
#[must_use]
pub fn export_filename(date: NaiveDate) -> String {
    format!("{EXPORT_FILE_PREFIX}_{}.xlsx", date.format("%Y-%m-%d"))
}

/// Flatten one lead into its display row.
///
/// `index` is zero-based; the S.No column is one-based.
#[must_use]
pub fn lead_row(index: usize, lead: &Lead) -> [String; 14] {
    [
        (index + 1).to_string(),
        lead.customer_name.clone(),
        lead.customer_phone.clone(),
        lead.email.clone(),
        lead.division.clone().unwrap_or_default(),
        lead.product_category.clone().unwrap_or_default(),
        lead.product.clone().unwrap_or_default(),
        lead.location.clone(),
        lead.product_description.clone().unwrap_or_default(),
        lead.area_of_interest.clone().unwrap_or_default(),
        lead.firm_name.clone().unwrap_or_default(),
        lead.feedback.clone().unwrap_or_default(),
        lead.remark.clone().unwrap_or_default(),
        lead.created_at.format("%d %b %Y, %H:%M").to_string(),
    ]
}

/// Build the export workbook and return its serialized bytes.
///
/// The sheet holds one header row plus one row per lead, in input order.
///
/// # Errors
///
/// Returns [`ExportError::NoLeads`] for an empty list and
/// [`ExportError::Xlsx`] if workbook construction fails.
#[allow(clippy::cast_possible_truncation)] // 14 columns; the sheet row limit is enforced by the writer
pub fn build_workbook(leads: &[Lead]) -> Result<Vec<u8>, ExportError> {
    if leads.is_empty() {
        return Err(ExportError::NoLeads);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(HEADER_FILL);

    for (col, (header, width)) in HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        worksheet.set_column_width(col as u16, width)?;
    }

    for (i, lead) in leads.iter().enumerate() {
        for (col, cell) in lead_row(i, lead).iter().enumerate() {
            worksheet.write_string((i + 1) as u32, col as u16, cell.as_str())?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use leaddesk_core::LeadId;

    fn sample_lead(n: usize) -> Lead {
        Lead {
            id: LeadId::new(format!("id-{n}")),
            created_at: Utc.with_ymd_and_hms(2026, 3, 12, 10, 30, 0).unwrap(),
            customer_name: format!("Customer {n}"),
            customer_phone: "9999999999".to_string(),
            email: format!("c{n}@example.com"),
            location: "Raipur".to_string(),
            division: Some("Solar".to_string()),
            product_category: None,
            product: None,
            product_description: None,
            area_of_interest: None,
            firm_name: None,
            feedback: None,
            remark: None,
        }
    }

    #[test]
    fn test_empty_export_is_an_error() {
        assert!(matches!(build_workbook(&[]), Err(ExportError::NoLeads)));
    }

    #[test]
    fn test_workbook_bytes_nonempty() {
        let leads: Vec<Lead> = (0..3).map(sample_lead).collect();
        let bytes = build_workbook(&leads).unwrap();
        // XLSX files are zip archives; check the magic bytes.
        assert_eq!(bytes.get(..2), Some(&b"PK"[..]));
    }

    #[test]
    fn test_lead_row_serial_number_is_one_based() {
        let lead = sample_lead(0);
        let row = lead_row(0, &lead);
        assert_eq!(row[0], "1");
        let row = lead_row(41, &lead);
        assert_eq!(row[0], "42");
    }

    #[test]
    fn test_lead_row_blank_optionals() {
        let mut lead = sample_lead(0);
        lead.division = None;
        let row = lead_row(0, &lead);
        assert_eq!(row[4], "");
        assert_eq!(row[12], "");
    }

    #[test]
    fn test_lead_row_matches_header_count() {
        let row = lead_row(0, &sample_lead(0));
        assert_eq!(row.len(), HEADERS.len());
        assert_eq!(COLUMN_WIDTHS.len(), HEADERS.len());
    }

    #[test]
    fn test_created_on_formatting() {
        let row = lead_row(0, &sample_lead(0));
        assert_eq!(row[13], "12 Mar 2026, 10:30");
    }

    #[test]
    fn test_export_filename_pattern() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(export_filename(date), "leaddesk_leads_2026-08-07.xlsx");
    }
}
