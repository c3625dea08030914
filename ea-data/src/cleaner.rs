//! Price normalization for scraped listing CSVs.

use anyhow::{anyhow, Context};
use std::io;

/// Parse an Indian-grouped price ("1,82,990") into a number (182990.0).
pub fn standardize_indian_price(price: &str) -> anyhow::Result<f64> {
    let digits: String = price.trim().chars().filter(|c| *c != ',').collect();
    digits
        .parse::<f64>()
        .with_context(|| format!("Invalid price: {:?}", price))
}

/// Copy a CSV, rewriting `price_column` as a plain number.
///
/// When `keep_columns` is non-empty only those columns are written, in that
/// order. Returns the number of data rows written.
pub fn clean_prices<R: io::Read, W: io::Write>(
    reader: R,
    writer: W,
    price_column: &str,
    keep_columns: &[&str],
) -> anyhow::Result<usize> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();

    let price_idx = headers
        .iter()
        .position(|h| h == price_column)
        .ok_or_else(|| anyhow!("Missing price column: {}", price_column))?;

    let output_idx: Vec<usize> = if keep_columns.is_empty() {
        (0..headers.len()).collect()
    } else {
        keep_columns
            .iter()
            .map(|col| {
                headers
                    .iter()
                    .position(|h| h == *col)
                    .ok_or_else(|| anyhow!("Missing column: {}", col))
            })
            .collect::<anyhow::Result<_>>()?
    };

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(output_idx.iter().map(|&i| &headers[i]))?;

    let mut rows = 0;
    for (line, record) in rdr.records().enumerate() {
        let record = record?;
        let raw_price = record.get(price_idx).unwrap_or("");
        let price = standardize_indian_price(raw_price)
            .with_context(|| format!("Row {}", line + 1))?;
        let price = price.to_string();

        let fields: Vec<&str> = output_idx
            .iter()
            .map(|&i| {
                if i == price_idx {
                    price.as_str()
                } else {
                    record.get(i).unwrap_or("")
                }
            })
            .collect();
        wtr.write_record(&fields)?;
        rows += 1;
    }
    wtr.flush()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardize_indian_price() {
        assert_eq!(standardize_indian_price("1,82,990").unwrap(), 182990.0);
        assert_eq!(standardize_indian_price("54,990").unwrap(), 54990.0);
        assert_eq!(standardize_indian_price(" 999 ").unwrap(), 999.0);
        assert_eq!(standardize_indian_price("1,234.50").unwrap(), 1234.5);
        assert!(standardize_indian_price("N/A").is_err());
        assert!(standardize_indian_price("").is_err());
    }

    #[test]
    fn test_clean_prices_selects_columns() {
        let input = "title,price,url\n\"Laptop A, 16GB\",\"1,82,990\",http://a\nLaptop B,\"54,990\",http://b\n";
        let mut out = Vec::new();
        let rows = clean_prices(input.as_bytes(), &mut out, "price", &["title", "price"]).unwrap();

        assert_eq!(rows, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "title,price\n\"Laptop A, 16GB\",182990\nLaptop B,54990\n"
        );
    }

    #[test]
    fn test_clean_prices_keeps_all_columns_by_default() {
        let input = "price,title\n\"1,000\",X\n";
        let mut out = Vec::new();
        clean_prices(input.as_bytes(), &mut out, "price", &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "price,title\n1000,X\n");
    }

    #[test]
    fn test_clean_prices_errors() {
        let mut out = Vec::new();
        let err = clean_prices("title\nX\n".as_bytes(), &mut out, "price", &[]).unwrap_err();
        assert!(err.to_string().contains("price"));

        let mut out = Vec::new();
        let err = clean_prices("title,price\nX,abc\n".as_bytes(), &mut out, "price", &[])
            .unwrap_err();
        assert!(err.to_string().contains("Row 1"));

        let mut out = Vec::new();
        assert!(clean_prices("price\n1\n".as_bytes(), &mut out, "price", &["nope"]).is_err());
    }
}
