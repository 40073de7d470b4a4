use env_logger::Env;
use log::info;
use std::error::Error;
use std::path::PathBuf;
use structopt::StructOpt;
use thousands::Separable;

mod chart;
mod check_table;
mod error;
mod loader;
mod page;
mod stats;
mod stats_data;
mod stats_table;

use crate::page::StatsPage;
use crate::stats::Record;
use crate::stats_data::{CHECK_ITEMS, FRAMEWORK_CHECKS, FRAMEWORK_STATS};

const CHECKS_MOUNT: &str = "framework-checks";

#[derive(Debug, StructOpt)]
#[structopt(
    name = "framework-stats",
    about = "Renders framework benchmark comparison tables into an HTML page"
)]
struct Opt {
    /// CSV file with a `framework` column and one column per metric. Uses the built-in
    /// sample when omitted.
    #[structopt(long, parse(from_os_str))]
    data: Option<PathBuf>,

    /// Field to sort and scale by. Repeat for several tables.
    #[structopt(long = "key")]
    keys: Vec<String>,

    /// Unit suffix for each --key, matched by position.
    #[structopt(long = "unit")]
    units: Vec<String>,

    /// Mount point id for each --key, matched by position. Defaults to `<key>-stats`.
    #[structopt(long = "mount")]
    mounts: Vec<String>,

    #[structopt(long, default_value = "Framework stats")]
    title: String,

    #[structopt(long, default_value = "stats.html", parse(from_os_str))]
    output: PathBuf,

    /// Also draw an SVG bar chart of the first table.
    #[structopt(long, parse(from_os_str))]
    chart: Option<PathBuf>,

    /// Also render the framework checklist.
    #[structopt(long)]
    checks: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct TableRequest {
    key: String,
    unit: String,
    mount: String,
}

impl TableRequest {
    fn new(key: &str, unit: &str, mount: &str) -> Self {
        Self {
            key: key.to_string(),
            unit: unit.to_string(),
            mount: mount.to_string(),
        }
    }
}

fn table_requests(opt: &Opt) -> Vec<TableRequest> {
    if opt.keys.is_empty() {
        return vec![
            TableRequest::new("createRows", "ms", "create-rows-stats"),
            TableRequest::new("size", "kb", "size-stats"),
        ];
    }

    opt.keys
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let unit = opt.units.get(i).cloned().unwrap_or_default();
            let mount = opt
                .mounts
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("{}-stats", key));
            TableRequest { key: key.clone(), unit, mount }
        })
        .collect()
}

fn run(opt: &Opt) -> Result<(), Box<dyn Error>> {
    let records: Vec<Record> = match &opt.data {
        Some(path) => loader::load_records_from_path(path)?,
        None => FRAMEWORK_STATS.clone(),
    };
    info!("{} records", records.len().separate_with_commas());

    let requests = table_requests(opt);
    let mut page = StatsPage::new(&opt.title, &[]);

    for request in &requests {
        page.add_mount(&request.mount);
        // Sorting is destructive, every table gets its own copy.
        let mut rows = records.clone();
        stats_table::draw_table(&mut rows, &request.key, &request.mount, &request.unit, &mut page)?;

        let highest = rows
            .last()
            .and_then(|r| r.get(&request.key))
            .map(|v| v.separate_with_commas())
            .unwrap_or_default();
        info!("table {:20} -> #{} (max {}{})", request.key, request.mount, highest, request.unit);
    }

    if opt.checks {
        page.add_mount(CHECKS_MOUNT);
        check_table::draw_check_table(&CHECK_ITEMS, &FRAMEWORK_CHECKS, CHECKS_MOUNT, &mut page)?;
        info!("checklist -> #{}", CHECKS_MOUNT);
    }

    if let (Some(path), Some(request)) = (&opt.chart, requests.first()) {
        let mut rows = records.clone();
        chart::write_bar_chart(
            &mut rows,
            &request.key,
            &request.unit,
            &format!("{} ({})", opt.title, request.key),
            path,
        )?;
    }

    page.write(&opt.output)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let opt = Opt::from_args();
    run(&opt)
}
