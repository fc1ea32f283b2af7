// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document store: the corpus in load order plus lookup by id.
//!
//! Ids are expected unique. An empty or repeated id is logged and the
//! document dropped (first one wins), matching what the index builder does,
//! so every id the index can return resolves here.

use std::collections::HashMap;
use tracing::warn;

use crate::error::{Result, SearchError};
use crate::types::Document;

#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
    by_id: HashMap<String, usize>,
}

impl DocumentStore {
    pub fn new(documents: Vec<Document>) -> Self {
        let mut store = Self {
            documents: Vec::with_capacity(documents.len()),
            by_id: HashMap::with_capacity(documents.len()),
        };
        for document in documents {
            if document.id.trim().is_empty() {
                warn!(title = %document.title, "dropping document with empty id");
                continue;
            }
            if store.by_id.contains_key(&document.id) {
                warn!(id = %document.id, "dropping document with duplicate id");
                continue;
            }
            store.by_id.insert(document.id.clone(), store.documents.len());
            store.documents.push(document);
        }
        store
    }

    /// All documents, in load order.
    pub fn all(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: &str) -> Result<&Document> {
        self.by_id
            .get(id)
            .map(|&i| &self.documents[i])
            .ok_or_else(|| SearchError::DocumentNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
