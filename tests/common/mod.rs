#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the artifact-html binary.
#[macro_export]
macro_rules! artifact_html {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("artifact-html"))
    };
}

/// Creates a temporary directory with artifact files for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, returning its full path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    pub fn exists(&self, relative_path: &str) -> bool {
        self.dir.path().join(relative_path).exists()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".artifact-html.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Chart component whose data array is linked to a bar chart.
pub const SALES_COMPONENT: &str = r##"import { BarChart, Bar, XAxis } from "recharts";

const salesData = [
  { month: "Jan", revenue: 120 },
  { month: "Feb", revenue: 95 },
  { month: "Mar", revenue: 140 },
];

export default function Sales() {
  return (
    <BarChart width={400} height={300} data={salesData}>
      <XAxis dataKey="month" />
      <Bar dataKey="revenue" fill="#4f46e5" />
    </BarChart>
  );
}
"##;

/// Chart component with tags but no recoverable data.
pub const TAG_ONLY_COMPONENT: &str = r"export const Trend = ({ points }) => (
  <LineChart data={points.map(toPoint)}>
    <Line dataKey='y' />
  </LineChart>
);
";

pub const SIMPLE_SVG: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><circle cx="5" cy="5" r="4"/></svg>"#;
