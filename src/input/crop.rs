//! Code for reading crop listing information from CSV files.
use super::*;
use crate::crop::CropMap;
use crate::units::{MoneyPerTonne, Tonnes};
use std::path::Path;

const CROPS_FILE_NAME: &str = "crops.csv";

/// Reads crop listings from a CSV file.
///
/// # Arguments
///
/// * `model_dir` - Folder containing model configuration files
///
/// # Returns
///
/// A [`CropMap`] with the parsed crop listing data or an error
pub fn read_crops(model_dir: &Path) -> Result<CropMap> {
    let file_path = model_dir.join(CROPS_FILE_NAME);
    let crops: CropMap = read_csv_id_file(&file_path)?;

    for crop in crops.values() {
        ensure!(
            crop.quantity > Tonnes(0.0),
            "Crop listing {} must have a positive quantity",
            crop.id
        );
        ensure!(
            crop.price >= MoneyPerTonne(0.0),
            "Crop listing {} cannot have a negative price",
            crop.id
        );
    }

    Ok(crops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::{CropID, Quality};
    use chrono::NaiveDate;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    /// Create a crops file with the given rows in dir_path
    fn create_crops_file(dir_path: &Path, rows: &str) {
        let file_path = dir_path.join(CROPS_FILE_NAME);
        let mut file = File::create(file_path).unwrap();
        writeln!(file, "id,kind,quantity,quality,price,farmer,harvest_date\n{rows}").unwrap();
    }

    #[test]
    fn test_read_crops() {
        let dir = tempdir().unwrap();
        create_crops_file(
            dir.path(),
            "wheat1,Wheat,5000,A,85.0,farmer1,2026-03-01\n\
             rice1,Rice,3000,B,120.0,farmer1,2026-02-15",
        );
        let crops = read_crops(dir.path()).unwrap();
        assert_eq!(crops.len(), 2);

        let crop = &crops[&CropID::from("wheat1")];
        assert_eq!(crop.kind, "Wheat");
        assert_eq!(crop.quality, Quality::A);
        assert_eq!(crop.price, MoneyPerTonne(85.0));
        assert_eq!(
            crop.harvest_date,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_read_crops_invalid_quality() {
        let dir = tempdir().unwrap();
        create_crops_file(dir.path(), "wheat1,Wheat,5000,Z,85.0,farmer1,2026-03-01");
        assert!(read_crops(dir.path()).is_err());
    }

    #[test]
    fn test_read_crops_non_positive_quantity() {
        let dir = tempdir().unwrap();
        create_crops_file(dir.path(), "wheat1,Wheat,0,A,85.0,farmer1,2026-03-01");
        assert!(read_crops(dir.path()).is_err());
    }
}
