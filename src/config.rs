use std::path::PathBuf;

/// Dashboard settings, fixed at process start.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Source table, relative to the working directory.
    pub data_path: PathBuf,
    /// Rows shown in the Home data preview.
    pub preview_rows: usize,
    /// Countries shown in the Home bar chart.
    pub top_n: usize,
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("pesticides.csv"),
            preview_rows: 10,
            top_n: 10,
            window_title: "Pesticides Use Dashboard".to_string(),
            inner_size: [1280.0, 860.0],
            min_inner_size: [800.0, 500.0],
        }
    }
}
