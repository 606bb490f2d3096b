//! Pipeline Execution Context
//!
//! Owns the dataset, the configuration and the graph built from them.
//! Replacing the dataset or changing the configuration discards the graph,
//! so a stale graph can never be exported.

use linkgraph_table::Dataset;
use tracing::debug;

use super::error::PipelineError;
use crate::config::{PipelineConfig, Validatable};
use crate::features::attribute_mapping::MappingReport;
use crate::features::graph_builder::LinkGraph;

#[derive(Debug, Clone)]
pub struct PipelineContext {
    dataset: Dataset,
    config: PipelineConfig,
    graph: Option<LinkGraph>,
    mapping: Option<MappingReport>,
}

impl PipelineContext {
    /// Create a context; the configuration is validated here
    pub fn new(dataset: Dataset, config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self {
            dataset,
            config,
            graph: None,
            mapping: None,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Replace the configuration, discarding the graph if anything changed
    pub fn set_config(&mut self, config: PipelineConfig) -> Result<(), PipelineError> {
        config.validate()?;
        if config != self.config {
            self.invalidate();
            self.config = config;
        }
        Ok(())
    }

    /// Replace the dataset, always discarding the graph
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.invalidate();
        self.dataset = dataset;
    }

    pub fn has_graph(&self) -> bool {
        self.graph.is_some()
    }

    pub fn graph(&self) -> Result<&LinkGraph, PipelineError> {
        self.graph.as_ref().ok_or(PipelineError::NoGraph)
    }

    pub fn graph_mut(&mut self) -> Result<&mut LinkGraph, PipelineError> {
        self.graph.as_mut().ok_or(PipelineError::NoGraph)
    }

    /// Hand the graph to the caller, leaving the context unbuilt
    pub fn take_graph(&mut self) -> Option<LinkGraph> {
        self.mapping = None;
        self.graph.take()
    }

    /// Report of the last attribute join on the current graph
    pub fn mapping_report(&self) -> Option<&MappingReport> {
        self.mapping.as_ref()
    }

    pub(crate) fn store_graph(&mut self, graph: LinkGraph) {
        self.mapping = None;
        self.graph = Some(graph);
    }

    pub(crate) fn store_mapping(&mut self, report: MappingReport) {
        self.mapping = Some(report);
    }

    fn invalidate(&mut self) {
        self.mapping = None;
        if self.graph.take().is_some() {
            debug!("discarded graph after upstream change");
        }
    }
}
