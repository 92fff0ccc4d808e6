use anyhow::Result;
use log::info;

use cli_table::{print_stdout, Table, WithTitle};

use frmaps::map::SvgTemplates;
use frmaps::region::{self, aggregate_regions};

#[derive(Table)]
struct RegionRow {
    #[table(title = "Code")]
    code: &'static str,
    #[table(title = "Région")]
    name: &'static str,
    #[table(title = "Total")]
    total: i64,
}

fn main() -> Result<()> {
    env_logger::init();

    let templates = SvgTemplates::load()?;
    info!(
        "loaded base maps: departements {} bytes, regions {} bytes",
        templates.departments.len(),
        templates.regions.len()
    );

    // sample per-department counts, Île-de-France plus a few others
    let values = vec![
        ("75", 10),
        ("77", 5),
        ("78", 3),
        ("91", 2),
        ("92", 4),
        ("93", 6),
        ("94", 1),
        ("95", 2),
        ("13", 7),
        ("69", 8),
        ("2A", 1),
    ];

    let mut totals = aggregate_regions(values)?;
    totals.sort_by(|a, b| b.1.cmp(&a.1));

    info!("aggregated into {} region(s)", totals.len());

    let rows: Vec<RegionRow> = totals
        .into_iter()
        .map(|(code, total)| RegionRow {
            code,
            name: region::name_of(code).unwrap_or("?"),
            total,
        })
        .collect();

    print_stdout(rows.with_title())?;

    Ok(())
}
