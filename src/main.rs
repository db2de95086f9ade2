//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use cine_graph::{ViewerConfig, init_logging, run};

fn main() {
	init_logging();

	leptos::task::spawn_local(run(ViewerConfig::default()));
}
