// src/export.rs
//
// Thin export collaborator: tabular dumps of the finished graph.
// Nothing here feeds back into the pipeline; the graph itself stays
// in memory.

use std::{error::Error, fs, io::BufWriter, path::PathBuf};

use crate::config::consts::{EDGES_FILE_STEM, PLAYERS_FILE_STEM};
use crate::config::options::ExportOptions;
use crate::csv::write_row;
use crate::graph::TeamGraph;

/// Write the node list (`players.csv`) and edge list (`teammates.csv`)
/// under the configured output directory. Returns the paths written.
pub fn export_graph(
    opts: &ExportOptions,
    graph: &TeamGraph,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    fs::create_dir_all(&opts.out_dir)?;
    let sep = opts.format.delim();

    let nodes_path = opts.file_path(PLAYERS_FILE_STEM);
    {
        let mut w = BufWriter::new(fs::File::create(&nodes_path)?);
        if opts.include_headers {
            write_row(&mut w, &[s!("Name"), s!("Profile"), s!("Degree")], sep)?;
        }
        for p in graph.nodes() {
            write_row(
                &mut w,
                &[
                    p.name.clone(),
                    p.profile_id.clone(),
                    graph.degree(&p.profile_id).to_string(),
                ],
                sep,
            )?;
        }
    }

    let edges_path = opts.file_path(EDGES_FILE_STEM);
    {
        let mut w = BufWriter::new(fs::File::create(&edges_path)?);
        if opts.include_headers {
            write_row(&mut w, &[s!("Player A"), s!("Player B")], sep)?;
        }
        for (a, b) in graph.edges() {
            write_row(&mut w, &[s!(a), s!(b)], sep)?;
        }
    }

    logf!(
        "Export: {} nodes, {} edges → {}",
        graph.node_count(),
        graph.edge_count(),
        opts.out_dir.display()
    );
    Ok(vec![nodes_path, edges_path])
}
