mod call;
mod context;
mod convert;
mod init;
mod inspect;

pub use call::{run_call, run_call_impl};
pub use context::{STDIN_PATH, is_stdin, load_config, read_input};
pub use convert::{
    ARTIFACT_EXTENSIONS, BatchSummary, collect_inputs, output_path_for, run_convert,
    run_convert_impl,
};
pub use init::{run_init, run_init_impl};
pub use inspect::{run_inspect, run_inspect_impl};
