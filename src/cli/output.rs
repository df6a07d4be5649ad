use crate::cli::{HostResolution, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{NOTHING, UTF8_FULL};
use comfy_table::*;
use ipregions::{RegionRecord, RegionSnapshot, Resolution};

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| {
            Cell::new(title)
                .add_attribute(Attribute::Bold)
                .fg(Color::Green)
        })
        .collect()
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/*--------------------------------------------------------------------------------------
  Resolution Table
--------------------------------------------------------------------------------------*/

pub fn resolution_table(resolutions: &[HostResolution]) {
    let mut table = new_table();
    table.set_header(header(&["Host", "Address", "Region", "Display Name", "Time"]));

    for resolution in resolutions {
        let row = match &resolution.result {
            Ok(Resolution::Found {
                address,
                region,
                display_name,
                elapsed,
            }) => vec![
                Cell::new(&resolution.host).add_attribute(Attribute::Bold),
                Cell::new(address),
                Cell::new(region),
                Cell::new(display_name),
                Cell::new(format!("{} ms", elapsed.as_millis())),
            ],
            Ok(not_found) => vec![
                Cell::new(&resolution.host).add_attribute(Attribute::Bold),
                Cell::new(not_found.address()),
                Cell::new(not_found.display_name()).fg(Color::Yellow),
                Cell::new(""),
                Cell::new(""),
            ],
            Err(error) => vec![
                Cell::new(&resolution.host).add_attribute(Attribute::Bold),
                Cell::new(""),
                Cell::new(error).fg(Color::Red),
                Cell::new(""),
                Cell::new(""),
            ],
        };
        table.add_row(row);
    }

    println!("{table}");
}

/*--------------------------------------------------------------------------------------
  Region Table
--------------------------------------------------------------------------------------*/

pub fn region_table(regions: &[RegionRecord]) {
    let mut table = new_table();
    table.set_header(header(&["Region", "Providers", "Subnets", "Total Addresses"]));

    for record in regions {
        let providers = record
            .providers()
            .iter()
            .map(|provider| provider.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        table.add_row(vec![
            Cell::new(record.region()).add_attribute(Attribute::Bold),
            Cell::new(providers),
            Cell::new(record.subnets().len()),
            Cell::new(record.total_address_count()),
        ]);
    }

    // Right-align the count columns
    for index in [2, 3] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{table}");
}

/*--------------------------------------------------------------------------------------
  Snapshot Summary
--------------------------------------------------------------------------------------*/

pub fn summary(snapshot: &RegionSnapshot) {
    let mut summary_table = Table::new();
    summary_table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary_table.add_row(vec![
        Cell::new(snapshot.regions().len()),
        Cell::new("Regions"),
    ]);
    summary_table.add_row(vec![Cell::new(snapshot.index().len()), Cell::new("Subnets")]);
    summary_table.add_row(vec![
        Cell::new(snapshot.total_address_count()),
        Cell::new("Addresses"),
    ]);
    summary_table.add_row(vec![
        Cell::new(snapshot.loaded_at().format("%Y-%m-%d %H:%M:%S UTC")),
        Cell::new("Loaded"),
    ]);

    if let Some(column) = summary_table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{summary_table}");
}

/*--------------------------------------------------------------------------------------
  Regions In JSON Format
--------------------------------------------------------------------------------------*/

pub fn regions_in_json_format(regions: &[RegionRecord]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(regions)?);
    Ok(())
}

/*--------------------------------------------------------------------------------------
  Subnets In CIDR Format
--------------------------------------------------------------------------------------*/

pub fn subnets_in_cidr_format(regions: &[RegionRecord]) {
    for subnet in regions.iter().flat_map(RegionRecord::subnets) {
        println!("{subnet}");
    }
}

/*--------------------------------------------------------------------------------------
  Subnets In Netmask Format
--------------------------------------------------------------------------------------*/

pub fn subnets_in_netmask_format(regions: &[RegionRecord]) {
    for subnet in regions.iter().flat_map(RegionRecord::subnets) {
        println!("{} {}", subnet.base(), subnet.mask());
    }
}

/*--------------------------------------------------------------------------------------
  Region Names
--------------------------------------------------------------------------------------*/

pub fn region_names(regions: &[RegionRecord]) {
    for record in regions {
        println!("{}", record.region());
    }
}
