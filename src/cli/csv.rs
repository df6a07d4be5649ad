use crate::cli::Result;
use ipregions::RegionRecord;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Save Region Records to CSV File
-------------------------------------------------------------------------------------------------*/

pub fn save(regions: &[RegionRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    // Write header
    writer.serialize([
        "Region",
        "Providers",
        "Subnet Count",
        "Total Addresses",
        "Subnets",
    ])?;

    // Write region records
    for record in regions {
        let row = (
            record.region().to_string(),
            join(record.providers()),
            record.subnets().len(),
            record.total_address_count(),
            join(record.subnets()),
        );
        writer.serialize(row)?;
    }

    writer.flush()?;

    Ok(())
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}
