use anyhow::Result;

use crate::config::{Config, DEFAULT_MODEL};
use crate::data_models::{Analysis, ChatReport, SearchResult};
use crate::llm::{ChatModel, OpenRouterClient};
use crate::search::{SearchProvider, TavilyClient};

const SYSTEM_PROMPT: &str = "You are an assistant that analyzes the contents of a website \
and provides a comprehensive summary. Focus on the main content and ignore navigation elements. \
Respond in markdown format with clear sections.";

/// Knobs for one chat run. Defaults match the public call surface:
/// three results, the free kimi model, no streaming.
#[derive(Debug, Clone)]
pub struct ChatOptions {
    pub max_results: usize,
    pub model: String,
    pub stream: bool,
}

impl Default for ChatOptions {
    fn default() -> ChatOptions {
        ChatOptions {
            max_results: 3,
            model: DEFAULT_MODEL.to_string(),
            stream: false,
        }
    }
}

/// Builds the per-result user prompt. Pure formatting; content is passed
/// through whole, no truncation.
pub fn build_prompt(result: &SearchResult) -> String {
    format!(
        "You are analyzing a website with the following information:\n\
         \n\
         Title: {}\n\
         URL: {}\n\
         \n\
         Content:\n\
         {}\n\
         \n\
         Please provide a comprehensive summary of this website in markdown format. Include:\n\
         1. Main topic/purpose of the website\n\
         2. Key information or highlights\n\
         3. Any important announcements or news if present\n\
         4. Overall assessment of the content\n\
         \n\
         Format your response in clear markdown sections.",
        result.title, result.url, result.content
    )
}

/// Orchestrates search -> prompt -> completion -> aggregate report. Holds
/// the two collaborator handles and nothing else; every call is stateless.
pub struct Processor {
    searcher: Box<dyn SearchProvider>,
    llm: Box<dyn ChatModel>,
}

impl Processor {
    /// Builds the two concrete API clients from resolved configuration.
    pub fn new(config: &Config) -> Result<Processor> {
        let searcher = TavilyClient::new(
            config.search_api_key.clone(),
            config.search_base_url.clone(),
        )?;
        let llm = OpenRouterClient::new(config.llm_api_key.clone(), config.llm_base_url.clone())?;
        Ok(Processor {
            searcher: Box::new(searcher),
            llm: Box::new(llm),
        })
    }

    /// Injection point for alternative collaborators (tests use stubs).
    pub fn with_collaborators(
        searcher: Box<dyn SearchProvider>,
        llm: Box<dyn ChatModel>,
    ) -> Processor {
        Processor { searcher, llm }
    }

    /// Searches for content related to the query, truncated (never padded)
    /// to `max_results`. A provider failure is logged and reported as an
    /// empty list; callers that need to tell "no matches" and "search
    /// broke" apart should use the provider directly.
    pub async fn search(&self, query: &str, max_results: usize) -> Vec<SearchResult> {
        match self.searcher.search(query).await {
            Ok(mut results) => {
                results.truncate(max_results);
                results
            }
            Err(e) => {
                log::error!("error searching for {query}, error: {e:#}");
                Vec::new()
            }
        }
    }

    /// Sends the fixed system instruction plus `prompt` to the model. Any
    /// failure is logged and comes back as an "Error: ..." string standing
    /// in for the analysis text.
    pub async fn ask_llm(&self, prompt: &str, model: &str, stream: bool) -> String {
        match self.llm.complete(SYSTEM_PROMPT, prompt, model, stream).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("error communicating with model {model}, error: {e:#}");
                format!("Error: {e}")
            }
        }
    }

    /// Top level: search, then one sequential completion per result, in
    /// search order. Never returns Err; only construction can fail.
    pub async fn chat(&self, url_or_query: &str, options: &ChatOptions) -> ChatReport {
        let results = self.search(url_or_query, options.max_results).await;

        if results.is_empty() {
            return ChatReport::failed(
                url_or_query.to_string(),
                "No search results found".to_string(),
            );
        }

        let mut analyses = Vec::with_capacity(results.len());
        for (index, result) in results.iter().enumerate() {
            log::info!("analyzing result {index}: {}", result.url);
            let prompt = build_prompt(result);
            let analysis = self.ask_llm(&prompt, &options.model, options.stream).await;

            analyses.push(Analysis {
                result_index: index,
                title: result.title.clone(),
                url: result.url.clone(),
                score: result.score,
                analysis,
            });
        }

        ChatReport::completed(url_or_query.to_string(), analyses)
    }
}
