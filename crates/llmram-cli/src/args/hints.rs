pub mod cmd {
    // Estimate commands
    pub const ESTIMATE_VERBOSE: &str = "llmram estimate --verbose";
    pub const ESTIMATE_NO_CONTEXT: &str = "llmram estimate --no-context";

    // Table commands
    pub const TABLE: &str = "llmram table";
    pub const TABLE_K_QUANT: &str = "llmram table --table k-quant";

    // Quant commands
    pub const QUANT_LIST_ALL: &str = "llmram quant list --all";

    // Config commands
    pub const CONFIG_SHOW: &str = "llmram config show";
    pub const CONFIG_INIT: &str = "llmram config init";
    pub const CONFIG_INIT_FORCE: &str = "llmram config init --force";
}

pub mod fmt {
    pub fn quant_list_table(table: &str) -> String {
        format!("llmram quant list --table {}", table)
    }

    pub fn estimate_with_memory(memory_gb: f64) -> String {
        format!("llmram estimate --memory {}", memory_gb)
    }
}
