use std::path::PathBuf;

use clap::{Args, ValueEnum};
use comfy_table::Table;
use isochron_core::{
    endpoint::Endpoint,
    results::{
        multigraph::MultiGraphPayload, payload::Payload, polygons::PolygonPayload,
        reachability::ReachabilityMap, statistics::Statistics, time_matrix::TimeMatrix,
    },
    transport::RequestMethod,
};
use isochron_http::{client::IsochronClient, reqwest_transport::HttpTransportParams};
use tracing::{info, warn};

use crate::options_file::load_options;

#[derive(Copy, Clone, ValueEnum)]
enum EndpointArg {
    Time,
    Reachability,
    Polygon,
    Multigraph,
    Statistics,
}

impl From<EndpointArg> for Endpoint {
    fn from(endpoint: EndpointArg) -> Self {
        match endpoint {
            EndpointArg::Time => Endpoint::Time,
            EndpointArg::Reachability => Endpoint::Reachability,
            EndpointArg::Polygon => Endpoint::Polygon,
            EndpointArg::Multigraph => Endpoint::MultiGraph,
            EndpointArg::Statistics => Endpoint::Statistics,
        }
    }
}

#[derive(Args)]
pub struct RequestArgs {
    /// Options file (JSON)
    #[arg(short = 'i', long)]
    input: PathBuf,

    #[arg(short = 'e', long, value_enum)]
    endpoint: EndpointArg,

    /// Send the options as query parameter instead of request body
    #[arg(long)]
    get: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout: u64,
}

pub async fn run(args: RequestArgs) -> anyhow::Result<()> {
    let options = load_options(&args.input)?;

    let method = if args.get {
        RequestMethod::Get
    } else {
        RequestMethod::Post
    };

    let client = IsochronClient::new(HttpTransportParams {
        timeout: std::time::Duration::from_secs(args.timeout),
        ..Default::default()
    })?
    .with_method(method);

    let response = client.execute(args.endpoint.into(), &options, None).await?;

    info!(
        "Round trip {:?}, service {} ms, parsing {:?}",
        response.round_trip_time(),
        response.server_request_time_ms(),
        response.parse_time()
    );

    match response.into_payload() {
        None => warn!("The service gateway timed out, no result available"),
        Some(Payload::TimeMatrix(matrix)) => println!("{}", time_matrix_table(&matrix)),
        Some(Payload::Reachability(reachability)) => {
            println!("{}", reachability_table(&reachability))
        }
        Some(Payload::Polygons(polygons)) => print_polygons(&polygons)?,
        Some(Payload::MultiGraph(multigraph)) => print_multigraph(&multigraph)?,
        Some(Payload::Statistics(statistics)) => println!("{}", statistics_table(&statistics)),
    }

    Ok(())
}

fn time_matrix_table(matrix: &TimeMatrix) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Source", "Target", "Travel time (s)", "Length (m)"]);

    for row in matrix.rows() {
        for (target, weight) in &row.targets {
            let travel_time = if weight.is_reachable() {
                weight.travel_time.to_string()
            } else {
                "unreachable".to_string()
            };

            table.add_row(vec![
                row.source.id.clone(),
                target.id.clone(),
                travel_time,
                weight.length.map(|length| length.to_string()).unwrap_or_default(),
            ]);
        }
    }

    table
}

fn reachability_table(reachability: &ReachabilityMap) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Travel time (s)"]);

    for (id, travel_time) in reachability.iter() {
        table.add_row(vec![id.to_string(), travel_time.to_string()]);
    }

    table
}

fn statistics_table(statistics: &Statistics) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Statistic", "Values"]);

    for (statistic_id, values) in &statistics.statistics {
        let values = values
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![statistic_id.clone(), values]);
    }

    table
}

fn print_polygons(polygons: &PolygonPayload) -> anyhow::Result<()> {
    match polygons {
        PolygonPayload::GeoJson(collection) => {
            println!("{}", serde_json::to_string_pretty(collection)?)
        }
        PolygonPayload::Json(sources) => {
            let mut table = Table::new();
            table.set_header(vec!["Source", "Travel time (s)", "Area", "Holes"]);

            for source in sources {
                for polygon in &source.polygons {
                    table.add_row(vec![
                        source.source_id.clone().unwrap_or_else(|| "*".to_string()),
                        polygon.travel_time.to_string(),
                        polygon.area.map(|area| area.to_string()).unwrap_or_default(),
                        polygon.polygon.interiors().len().to_string(),
                    ]);
                }
            }

            println!("{table}");
        }
    }

    Ok(())
}

fn print_multigraph(multigraph: &MultiGraphPayload) -> anyhow::Result<()> {
    match multigraph {
        MultiGraphPayload::GeoJson(collection) => {
            println!("{}", serde_json::to_string_pretty(collection)?)
        }
        MultiGraphPayload::Json(graph) => {
            let mut table = Table::new();
            table.set_header(vec!["Layer", "Elements"]);

            for (layer_id, layer) in &graph.layers {
                table.add_row(vec![layer_id.clone(), layer.values.len().to_string()]);
            }

            info!(
                "Multigraph with {} nodes and {} edges",
                graph.nodes.len(),
                graph.edges.len()
            );
            println!("{table}");
        }
    }

    Ok(())
}
