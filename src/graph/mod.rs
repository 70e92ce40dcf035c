pub mod accumulate;
pub mod bar;
pub mod bucket;
pub mod exec;
pub mod output;
pub mod report;

pub use accumulate::accumulate;
pub use bar::{render_bar, Bar};
pub use bucket::bucketize;
pub use exec::exec;
pub use output::{render_json, render_ndjson, render_text};
pub use report::assemble;
