//! The ordered survey graph with id-based lookup

use crate::survey::question::Question;
use rustc_hash::FxHashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// An ordered sequence of questions plus an id index.
///
/// Order is authored order: the first question is the traversal entry point
/// and list display follows insertion. The index is rebuilt on every
/// structural mutation; lookups during traversal are O(1).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurveyGraph {
    questions: Vec<Question>,
    index: FxHashMap<String, usize>,
}

impl SurveyGraph {
    pub fn new(questions: Vec<Question>) -> Self {
        let mut graph = SurveyGraph {
            questions,
            index: FxHashMap::default(),
        };
        graph.rebuild_index();
        graph
    }

    /// The two-question seed graph shipped on first run.
    pub fn default_questions() -> Vec<Question> {
        let mut first = Question::new("1", "Do you enjoy programming?");
        first.yes_next_id = Some("2".to_string());
        first.no_message = "Try starting with a few simple exercises!".to_string();

        let mut second = Question::new("2", "Do you know JavaScript?");
        second.yes_message = "Great! You are ready to start building.".to_string();
        second.no_message = "We recommend learning the JS basics first.".to_string();

        vec![first, second]
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();
    }

    /// The traversal entry point, if the graph is non-empty.
    pub fn first(&self) -> Option<&Question> {
        self.questions.first()
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Replace the question with a matching id, or append it as the last
    /// question if the id is unknown. All fields except `id` are editable.
    pub fn upsert(&mut self, question: Question) {
        match self.index.get(&question.id) {
            Some(&i) => self.questions[i] = question,
            None => {
                self.index
                    .insert(question.id.clone(), self.questions.len());
                self.questions.push(question);
            }
        }
    }

    /// Remove a question by id. Returns whether anything was removed.
    ///
    /// Deletion does not cascade: links in other questions that pointed at
    /// the removed id become dangling references, which the traversal
    /// engine degrades on silently.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        let removed = self.questions.len() != before;
        if removed {
            self.rebuild_index();
        }
        removed
    }

    /// Generate a fresh id: the unix-millis token the editor has always
    /// used, bumped past any collision so two adds in the same millisecond
    /// still yield distinct ids.
    pub fn fresh_id(&self) -> String {
        let mut millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        while self.contains(&millis.to_string()) {
            millis += 1;
        }
        millis.to_string()
    }
}

impl From<Vec<Question>> for SurveyGraph {
    fn from(questions: Vec<Question>) -> Self {
        SurveyGraph::new(questions)
    }
}
