//! Per-request lexical relevance over a batch of profiles
//!
//! A fresh in-memory tantivy index is built for every ranking call and
//! dropped with it, so BM25 statistics always describe exactly the batch
//! being ranked.

use anyhow::Result;
use discovery_config::LexicalConfig;
use discovery_core::RepositoryProfile;
use std::collections::HashMap;
use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::*;
use tantivy::{Index, IndexReader, IndexWriter, TantivyDocument};
use tracing::debug;

/// Stemming English analyzer, registered on every index by default
const TOKENIZER: &str = "en_stem";
const WRITER_MEMORY_BYTES: usize = 20_000_000;

pub struct RelevanceIndex {
    index: Index,
    reader: IndexReader,
    len: usize,
    boosts: LexicalConfig,
    // Fields
    key_field: Field,
    name_field: Field,
    topics_field: Field,
    description_field: Field,
    readme_field: Field,
}

impl RelevanceIndex {
    /// Index `profiles` keyed by `full_name`
    pub fn build(profiles: &[RepositoryProfile], boosts: &LexicalConfig) -> Result<Self> {
        let mut schema_builder = Schema::builder();

        let text = TextOptions::default().set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(TOKENIZER)
                .set_index_option(IndexRecordOption::WithFreqsAndPositions),
        );

        let key_field = schema_builder.add_text_field("full_name", STRING | STORED);
        let name_field = schema_builder.add_text_field("name", text.clone());
        let topics_field = schema_builder.add_text_field("topics", text.clone());
        let description_field = schema_builder.add_text_field("description", text.clone());
        let readme_field = schema_builder.add_text_field("readme", text);

        let index = Index::create_in_ram(schema_builder.build());

        let mut writer: IndexWriter = index.writer_with_num_threads(1, WRITER_MEMORY_BYTES)?;
        for profile in profiles {
            let mut doc = TantivyDocument::default();
            doc.add_text(key_field, &profile.full_name);
            doc.add_text(name_field, &profile.name);
            for topic in &profile.topics {
                doc.add_text(topics_field, topic);
            }
            if let Some(description) = &profile.description {
                doc.add_text(description_field, description);
            }
            doc.add_text(readme_field, &profile.readme_content);
            writer.add_document(doc)?;
        }
        writer.commit()?;

        let reader = index.reader()?;
        debug!(documents = profiles.len(), "Built relevance index");

        Ok(Self {
            index,
            reader,
            len: profiles.len(),
            boosts: boosts.clone(),
            key_field,
            name_field,
            topics_field,
            description_field,
            readme_field,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Boosted BM25 score per `full_name`
    ///
    /// Profiles the query does not match are absent from the map. A blank
    /// query matches nothing.
    pub fn scores(&self, query_str: &str) -> Result<HashMap<String, f64>> {
        let mut scores = HashMap::new();
        if self.is_empty() || query_str.trim().is_empty() {
            return Ok(scores);
        }

        let mut query_parser = QueryParser::for_index(
            &self.index,
            vec![
                self.name_field,
                self.topics_field,
                self.description_field,
                self.readme_field,
            ],
        );
        query_parser.set_field_boost(self.name_field, self.boosts.name_boost);
        query_parser.set_field_boost(self.topics_field, self.boosts.topics_boost);
        query_parser.set_field_boost(self.description_field, self.boosts.description_boost);
        query_parser.set_field_boost(self.readme_field, self.boosts.readme_boost);

        // Free text from users: keep whatever parses
        let (query, errors) = query_parser.parse_query_lenient(query_str);
        if !errors.is_empty() {
            debug!(query = query_str, errors = ?errors, "Ignored unparseable query parts");
        }

        let searcher = self.reader.searcher();
        let top_docs = searcher.search(&query, &TopDocs::with_limit(self.len))?;

        for (score, doc_address) in top_docs {
            let retrieved_doc: TantivyDocument = searcher.doc(doc_address)?;
            let Some(key) = retrieved_doc
                .get_first(self.key_field)
                .and_then(|v| v.as_str())
            else {
                continue;
            };
            // Hits arrive best first; a repeated key keeps its best score
            scores.entry(key.to_string()).or_insert(f64::from(score));
        }

        Ok(scores)
    }
}
