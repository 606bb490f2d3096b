//! Pipeline Orchestrator
//!
//! Stage order:
//! 1. extract   - designated columns → `Record`s (input-shape checks first)
//! 2. expand    - list fan-out, blank/self-loop filtering
//! 3. assemble  - `LinkGraph` per graph type and conflict policy
//! 4. map       - optional attribute table join
//! 5. export    - tables or GEXF
//!
//! Each stage is callable on its own; `build` and `run` chain them over a
//! `PipelineContext`.

use linkgraph_table::Dataset;
use tracing::{debug, info};

use super::context::PipelineContext;
use super::error::PipelineError;
use super::result::{PipelineResult, RunStats};
use crate::config::PipelineConfig;
use crate::features::attribute_mapping::{AttributeMapper, MappingReport};
use crate::features::expansion::{ExpansionStats, RecordExpander};
use crate::features::export::{export, ExportArtifact};
use crate::features::extraction::ColumnExtractor;
use crate::features::graph_builder::{
    GraphAssembler, GraphBuildResult, GraphBuilderUseCase, GraphBuilderUseCaseImpl,
};
use crate::shared::models::{EdgeCandidate, Record};

#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    extractor: ColumnExtractor,
    expander: RecordExpander,
    mapper: AttributeMapper,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one `Record` per dataset row
    ///
    /// Source and target are extracted independently, so both roles may name
    /// the same column with different modes. Fails if any configured column
    /// is absent.
    pub fn extract(&self, dataset: &Dataset, config: &PipelineConfig) -> Result<Vec<Record>, PipelineError> {
        let roles = [("source", &config.source_column), ("target", &config.target_column)];
        let attribute_roles = config.attribute_columns.iter().map(|c| ("attribute", c));
        for (role, column) in roles.into_iter().chain(attribute_roles) {
            if !dataset.has_column(column) {
                return Err(PipelineError::missing_column(role, column.as_str(), dataset.columns()));
            }
        }

        let sources = self
            .extractor
            .extract(&dataset.column(&config.source_column)?, config.source_processing);
        let targets = self
            .extractor
            .extract(&dataset.column(&config.target_column)?, config.target_processing);
        let attributes = config
            .attribute_columns
            .iter()
            .map(|name| dataset.column(name).map(|values| (name, values)))
            .collect::<Result<Vec<_>, _>>()?;

        let records: Vec<Record> = sources
            .into_iter()
            .zip(targets)
            .enumerate()
            .map(|(row, (source, target))| {
                attributes.iter().fold(Record::new(source, target), |record, (name, values)| {
                    record.with_attribute(name.as_str(), values[row].map(str::to_string))
                })
            })
            .collect();

        debug!(
            records = records.len(),
            source_mode = %config.source_processing,
            target_mode = %config.target_processing,
            "extracted records"
        );
        Ok(records)
    }

    pub fn expand(&self, records: &[Record]) -> (Vec<EdgeCandidate>, ExpansionStats) {
        self.expander.expand_with_stats(records)
    }

    pub fn assemble(
        &self,
        candidates: &[EdgeCandidate],
        config: &PipelineConfig,
    ) -> Result<GraphBuildResult, PipelineError> {
        let usecase = GraphBuilderUseCaseImpl::new(GraphAssembler::new(config.conflict_policy));
        Ok(usecase.build_graph(candidates, config.graph_type, &config.attribute_columns)?)
    }

    /// Extract, expand and assemble; the graph is stored in `ctx`
    ///
    /// On failure the context holds no graph.
    pub fn build(&self, ctx: &mut PipelineContext) -> Result<RunStats, PipelineError> {
        ctx.take_graph();

        let records = self.extract(ctx.dataset(), ctx.config())?;
        let (candidates, expansion) = self.expand(&records);
        let built = self.assemble(&candidates, ctx.config())?;

        let stats = RunStats {
            rows: ctx.dataset().len(),
            expansion,
            graph: built.stats,
            mapping: None,
        };
        ctx.store_graph(built.graph);

        info!(
            rows = stats.rows,
            candidates = stats.expansion.candidates,
            nodes = stats.graph.nodes,
            edges = stats.graph.edges,
            "built graph"
        );
        Ok(stats)
    }

    /// Join `table` onto the built graph by `key_column`
    pub fn map_attributes(
        &self,
        ctx: &mut PipelineContext,
        table: &Dataset,
        key_column: &str,
    ) -> Result<MappingReport, PipelineError> {
        if !table.has_column(key_column) {
            return Err(PipelineError::missing_column("key", key_column, table.columns()));
        }
        let report = self.mapper.map_attributes(ctx.graph_mut()?, table, key_column)?;
        ctx.store_mapping(report.clone());
        Ok(report)
    }

    /// Render the built graph in the configured format
    pub fn export(&self, ctx: &PipelineContext) -> Result<ExportArtifact, PipelineError> {
        Ok(export(ctx.graph()?, ctx.config().export_format)?)
    }

    /// Full run: build, optional attribute join, export
    ///
    /// The attribute table's key column comes from `attribute_table` in the
    /// configuration.
    pub fn run(
        &self,
        ctx: &mut PipelineContext,
        attribute_table: Option<&Dataset>,
    ) -> Result<PipelineResult, PipelineError> {
        let key_column = match attribute_table {
            Some(_) => Some(
                ctx.config()
                    .attribute_table
                    .as_ref()
                    .map(|t| t.key_column.clone())
                    .ok_or(PipelineError::MissingKeyColumnConfig)?,
            ),
            None => None,
        };
        if let (Some(table), Some(key)) = (attribute_table, key_column.as_deref()) {
            if !table.has_column(key) {
                return Err(PipelineError::missing_column("key", key, table.columns()));
            }
        }

        let mut stats = self.build(ctx)?;
        if let (Some(table), Some(key)) = (attribute_table, key_column.as_deref()) {
            stats.mapping = Some(self.map_attributes(ctx, table, key)?);
        }

        let artifact = self.export(ctx)?;
        Ok(PipelineResult { stats, artifact })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::export::ExportFormat;
    use crate::features::extraction::ExtractionMode;
    use crate::features::graph_builder::GraphType;
    use crate::shared::models::ExtractedValue;

    fn dataset(columns: &[&str], rows: &[&[Option<&str>]]) -> Dataset {
        Dataset::from_rows(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.map(str::to_string)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_extract_same_column_in_both_roles() {
        let data = dataset(&["text"], &[&[Some("#rust meets @ferris")]]);
        let config = PipelineConfig::new("text", "text")
            .source_processing(ExtractionMode::MentionsFreetext)
            .target_processing(ExtractionMode::HashtagsFreetext);

        let records = Pipeline::new().extract(&data, &config).unwrap();
        assert_eq!(records[0].source, ExtractedValue::List(vec!["ferris".into()]));
        assert_eq!(records[0].target, ExtractedValue::List(vec!["#rust".into()]));
    }

    #[test]
    fn test_extract_missing_column_is_input_shape_error() {
        let data = dataset(&["from", "to"], &[]);
        let config = PipelineConfig::new("from", "to").attribute_columns(["lang"]);

        let err = Pipeline::new().extract(&data, &config).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingColumn { role: "attribute", ref column, .. } if column == "lang"
        ));
    }

    #[test]
    fn test_failed_build_leaves_no_graph() {
        let data = dataset(&["from", "to"], &[&[Some("a"), Some("b")]]);
        let mut ctx = PipelineContext::new(data, PipelineConfig::new("from", "to")).unwrap();
        let pipeline = Pipeline::new();
        pipeline.build(&mut ctx).unwrap();
        assert!(ctx.has_graph());

        ctx.set_dataset(dataset(&["src", "to"], &[&[Some("a"), Some("b")]]));
        assert!(pipeline.build(&mut ctx).is_err());
        assert!(!ctx.has_graph());
    }

    #[test]
    fn test_run_with_attribute_table() {
        let data = dataset(
            &["from", "to", "lang"],
            &[&[Some("Alice"), Some("Bob"), Some("en")], &[Some("bob"), Some("carol"), None]],
        );
        let config = PipelineConfig::new("from", "to")
            .attribute_columns(["lang"])
            .graph_type(GraphType::UndirectedSimple)
            .attribute_table("handle");
        let table = dataset(&["handle", "followers"], &[&[Some("ALICE"), Some("10")]]);

        let mut ctx = PipelineContext::new(data, config).unwrap();
        let result = Pipeline::new().run(&mut ctx, Some(&table)).unwrap();

        assert_eq!(result.stats.rows, 2);
        assert_eq!(result.stats.graph.nodes, 3);
        assert_eq!(result.stats.graph.edges, 2);
        let mapping = result.stats.mapping.unwrap();
        assert_eq!((mapping.matched, mapping.unmatched), (1, 2));

        let graph = ctx.graph().unwrap();
        assert_eq!(graph.node("alice").unwrap().attrs["lang"], "en");
        assert_eq!(graph.node("alice").unwrap().attrs["followers"], "10");
        assert_eq!(graph.node("carol").unwrap().attrs["followers"], "No Data");
        assert_eq!(result.artifact.format(), ExportFormat::Tabular);
    }

    #[test]
    fn test_run_attribute_table_needs_key_config() {
        let data = dataset(&["from", "to"], &[&[Some("a"), Some("b")]]);
        let table = dataset(&["handle"], &[]);
        let mut ctx = PipelineContext::new(data, PipelineConfig::new("from", "to")).unwrap();

        let err = Pipeline::new().run(&mut ctx, Some(&table)).unwrap_err();
        assert!(matches!(err, PipelineError::MissingKeyColumnConfig));
    }

    #[test]
    fn test_run_missing_key_column_halts_before_build() {
        let data = dataset(&["from", "to"], &[&[Some("a"), Some("b")]]);
        let table = dataset(&["user"], &[]);
        let config = PipelineConfig::new("from", "to").attribute_table("handle");
        let mut ctx = PipelineContext::new(data, config).unwrap();

        let err = Pipeline::new().run(&mut ctx, Some(&table)).unwrap_err();
        assert!(matches!(err, PipelineError::MissingColumn { role: "key", .. }));
        assert!(!ctx.has_graph());
    }

    #[test]
    fn test_gexf_run_on_edgeless_graph_reports_empty_graph() {
        let data = dataset(&["from", "to"], &[&[Some("a"), Some("a")]]);
        let config = PipelineConfig::new("from", "to").export_format(ExportFormat::Gexf);
        let mut ctx = PipelineContext::new(data, config).unwrap();

        let err = Pipeline::new().run(&mut ctx, None).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Export(crate::features::export::ExportError::EmptyGraph)
        ));
        assert!(ctx.graph().unwrap().is_empty());
    }
}
