// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: load inputs, call the feature
// layer, hand results to the writers. No feature maths here
// and no printing (that's Layer 1).

// Build a feature table from a candidate file
pub mod build_features_use_case;

// Compute and explain one candidate's features
pub mod inspect_use_case;
