use crate::Result;
use serde_json::Value;

const PREAMBLE: &str = "You are an expert Kubernetes cluster analyst.
Your task is to analyze and summarize the provided Kubernetes cluster metrics data.

Here's the data:
";

const INSTRUCTIONS: &str = "

Please provide a comprehensive summary of this data, including:

1. Overview:
   - Total number of clusters
   - Total number of nodes across all clusters
   - Total number of pods across all clusters

2. Cluster Analysis:
   - For each cluster, provide:
     a) Cluster name
     b) Number of nodes
     c) Number of pods
     d) CPU usage percentage
     e) Memory usage percentage

3. Resource Utilization:
   - Identify the cluster with the highest CPU usage
   - Identify the cluster with the highest memory usage
   - Calculate and report the average CPU and memory usage across all clusters

4. Scale and Performance:
   - Rank the clusters from largest to smallest based on node count
   - Analyze the relationship between node count and pod count
   - Identify any clusters that might be under or over-utilized based on their metrics

5. Recommendations:
   - Suggest any potential optimizations or areas of concern based on the data
   - Identify which clusters might need scaling up or down

6. Timestamp Analysis:
   - Comment on the timestamp of the data and its relevance

Please provide your analysis in a clear, structured format using markdown for better readability.";

/// Embeds `input_data`, pretty-printed with two-space indentation, between
/// the fixed preamble and the analysis instructions.
pub fn render_prompt(input_data: &Value) -> Result<String> {
    let data = serde_json::to_string_pretty(input_data)?;

    let mut prompt = String::with_capacity(PREAMBLE.len() + data.len() + INSTRUCTIONS.len());
    prompt.push_str(PREAMBLE);
    prompt.push_str(&data);
    prompt.push_str(INSTRUCTIONS);

    Ok(prompt)
}
