/// JSON-RPC 2.0 bridge to the embedding frontend.
///
/// Outbound notifications carry loading progress, dataset errors, the ready
/// transition, and pick summaries; inbound methods cover the dataset retry
/// and frame diagnostics.
pub mod web_rpc;
