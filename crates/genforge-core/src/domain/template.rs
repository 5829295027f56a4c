//! Embedded template data for the generated project.
//!
//! The whole template is constant tables: a directory list plus one entry
//! per generated file. The scaffold service walks these tables verbatim; no
//! content is computed beyond interpolating the project name into the
//! manifest and the README title.

/// Directories created under the project root, parents first.
pub const DIRECTORIES: &[&str] = &[
    "config",
    "data/cache",
    "data/embeddings",
    "data/vectordb",
    "src/core",
    "src/prompts",
    "src/rag",
    "src/processing",
    "src/inference",
    "docs",
    "scripts",
];

/// One file of the template: a root-relative path and its full content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: &'static str,
    pub content: String,
}

impl TemplateFile {
    fn new(path: &'static str, content: impl Into<String>) -> Self {
        Self {
            path,
            content: content.into(),
        }
    }
}

/// Model and logging configuration under `config/`.
pub fn config_files() -> Vec<TemplateFile> {
    vec![
        TemplateFile::new("config/model_config.yaml", MODEL_CONFIG),
        TemplateFile::new("config/logging_config.yaml", LOGGING_CONFIG),
    ]
}

/// Python source stubs under `src/` plus the entry point.
pub fn source_files() -> Vec<TemplateFile> {
    vec![
        TemplateFile::new("src/core/base_llm.py", BASE_LLM),
        TemplateFile::new("src/core/gpt_client.py", GPT_CLIENT),
        TemplateFile::new("src/core/claude_client.py", CLAUDE_CLIENT),
        TemplateFile::new("src/core/local_llm.py", LOCAL_LLM),
        TemplateFile::new("src/core/model_factory.py", MODEL_FACTORY),
        TemplateFile::new("src/prompts/templates.py", PROMPT_TEMPLATES),
        TemplateFile::new("src/prompts/chain.py", PROMPT_CHAIN),
        TemplateFile::new("src/rag/embedder.py", EMBEDDER),
        TemplateFile::new("src/rag/retriever.py", RETRIEVER),
        TemplateFile::new("src/rag/vector_store.py", VECTOR_STORE),
        TemplateFile::new("src/rag/indexer.py", INDEXER),
        TemplateFile::new("src/processing/chunking.py", CHUNKING),
        TemplateFile::new("src/processing/tokenizer.py", TOKENIZER),
        TemplateFile::new("src/processing/preprocessor.py", PREPROCESSOR),
        TemplateFile::new("src/inference/inference_engine.py", INFERENCE_ENGINE),
        TemplateFile::new("src/inference/response_parser.py", RESPONSE_PARSER),
        TemplateFile::new("main.py", MAIN_PY),
    ]
}

/// `docs/README.md` and `docs/SETUP.md`, with the project name as title.
pub fn doc_files(project_name: &str) -> Vec<TemplateFile> {
    vec![
        TemplateFile::new(
            "docs/README.md",
            format!("# {project_name}\n\n{README_BODY}"),
        ),
        TemplateFile::new("docs/SETUP.md", SETUP_DOC),
    ]
}

/// Repository metadata: `.gitignore`, dependency manifests, `.env.example`.
pub fn meta_files(project_name: &str) -> Vec<TemplateFile> {
    vec![
        TemplateFile::new(".gitignore", GITIGNORE),
        TemplateFile::new("requirements.txt", REQUIREMENTS),
        TemplateFile::new("pyproject.toml", pyproject(project_name)),
        TemplateFile::new(".env.example", ENV_EXAMPLE),
    ]
}

/// Every file of the template, in scaffold order. Handy for tests and for
/// computing the expected file set.
pub fn all_files(project_name: &str) -> Vec<TemplateFile> {
    let mut files = config_files();
    files.extend(source_files());
    files.extend(doc_files(project_name));
    files.extend(meta_files(project_name));
    files
}

fn pyproject(project_name: &str) -> String {
    format!(
        r##"[build-system]
requires = ["setuptools>=65.0"]
build-backend = "setuptools.build_meta"

[project]
name = "{project_name}"
version = "0.1.0"
description = "A complete structure for generative AI projects"
requires-python = ">=3.8"
dependencies = [
    "python-dotenv>=1.0.0",
    "pyyaml>=6.0",
    "openai>=1.0.0",
    "anthropic>=0.7.0",
    "requests>=2.31.0",
]

[project.optional-dependencies]
dev = [
    "pytest>=7.0",
    "black>=23.0",
    "ruff>=0.1.0",
]

[tool.uv]
python = "3.8"
"##
    )
}

// ── Configuration ─────────────────────────────────────────────────────────────

const MODEL_CONFIG: &str = r##"# Model Configuration
models:
  - name: "gpt-4"
    provider: "openai"
    temperature: 0.7
    max_tokens: 2048

  - name: "claude-3"
    provider: "anthropic"
    temperature: 0.7
    max_tokens: 2048

embeddings:
  provider: "openai"
  model: "text-embedding-3-small"
"##;

const LOGGING_CONFIG: &str = r##"# Logging Configuration
version: 1
disable_existing_loggers: false

formatters:
  standard:
    format: '%(asctime)s - %(name)s - %(levelname)s - %(message)s'

handlers:
  console:
    class: logging.StreamHandler
    level: DEBUG
    formatter: standard
    stream: ext://sys.stdout

root:
  level: INFO
  handlers:
    - console
"##;

// ── Source stubs ──────────────────────────────────────────────────────────────

const BASE_LLM: &str = r##""""Base LLM abstraction"""

class BaseLLM:
    def __init__(self, model_name: str):
        self.model_name = model_name

    def generate(self, prompt: str) -> str:
        raise NotImplementedError
"##;

const GPT_CLIENT: &str = r##""""OpenAI GPT client"""

class GPTClient:
    def __init__(self, api_key: str):
        self.api_key = api_key

    def chat(self, messages: list) -> str:
        pass
"##;

const CLAUDE_CLIENT: &str = r##""""Anthropic Claude client"""

class ClaudeClient:
    def __init__(self, api_key: str):
        self.api_key = api_key

    def generate(self, prompt: str) -> str:
        pass
"##;

const LOCAL_LLM: &str = r##""""Local LLM implementation"""

class LocalLLM:
    def __init__(self, model_path: str):
        self.model_path = model_path

    def generate(self, prompt: str) -> str:
        pass
"##;

const MODEL_FACTORY: &str = r##""""Model factory pattern"""

class ModelFactory:
    @staticmethod
    def create_model(model_type: str, **kwargs):
        if model_type == "gpt":
            from .gpt_client import GPTClient
            return GPTClient(**kwargs)
        elif model_type == "claude":
            from .claude_client import ClaudeClient
            return ClaudeClient(**kwargs)
        elif model_type == "local":
            from .local_llm import LocalLLM
            return LocalLLM(**kwargs)
        else:
            raise ValueError(f"Unknown model type: {model_type}")
"##;

const PROMPT_TEMPLATES: &str = r##""""Prompt templates"""

SYSTEM_PROMPT = """You are a helpful AI assistant."""

CHAT_TEMPLATE = """
User: {user_input}
Assistant:
"""
"##;

const PROMPT_CHAIN: &str = r##""""Prompt chaining"""

class PromptChain:
    def __init__(self):
        self.steps = []

    def add_step(self, prompt: str):
        self.steps.append(prompt)

    def execute(self, initial_input: str):
        result = initial_input
        for step in self.steps:
            result = step.format(input=result)
        return result
"##;

const EMBEDDER: &str = r##""""Embedding generation"""

class Embedder:
    def __init__(self, model: str = "text-embedding-3-small"):
        self.model = model

    def embed(self, text: str) -> list:
        pass
"##;

const RETRIEVER: &str = r##""""Document retrieval"""

class Retriever:
    def __init__(self, vector_store):
        self.vector_store = vector_store

    def retrieve(self, query: str, top_k: int = 5):
        pass
"##;

const VECTOR_STORE: &str = r##""""Vector database interface"""

class VectorStore:
    def add(self, documents: list):
        pass

    def search(self, query_vector: list, top_k: int = 5):
        pass
"##;

const INDEXER: &str = r##""""Document indexing"""

class Indexer:
    def __init__(self, vector_store):
        self.vector_store = vector_store

    def index_documents(self, documents: list):
        pass
"##;

const CHUNKING: &str = r##""""Text chunking"""

def chunk_text(text: str, chunk_size: int = 512, overlap: int = 50) -> list:
    chunks = []
    for i in range(0, len(text), chunk_size - overlap):
        chunks.append(text[i:i + chunk_size])
    return chunks
"##;

const TOKENIZER: &str = r##""""Tokenization utilities"""

class Tokenizer:
    def __init__(self, model: str):
        self.model = model

    def tokenize(self, text: str) -> list:
        pass

    def count_tokens(self, text: str) -> int:
        pass
"##;

const PREPROCESSOR: &str = r##""""Text preprocessing"""

def clean_text(text: str) -> str:
    # Remove extra whitespace
    text = ' '.join(text.split())
    return text
"##;

const INFERENCE_ENGINE: &str = r##""""Inference orchestration"""

class InferenceEngine:
    def __init__(self, model, retriever=None):
        self.model = model
        self.retriever = retriever

    def generate(self, prompt: str, context: str = None) -> str:
        pass
"##;

const RESPONSE_PARSER: &str = r##""""Response parsing"""

class ResponseParser:
    @staticmethod
    def parse_json(response: str) -> dict:
        import json
        return json.loads(response)

    @staticmethod
    def parse_markdown(response: str) -> str:
        return response
"##;

const MAIN_PY: &str = r##""""Main application entry point"""

import logging
from src.core.model_factory import ModelFactory

logging.basicConfig(level=logging.INFO)
logger = logging.getLogger(__name__)

def main():
    logger.info("Starting application...")
    # Initialize your models and components here
    model = ModelFactory.create_model("gpt", api_key="your-api-key")
    logger.info("Application started successfully")

if __name__ == "__main__":
    main()
"##;

// ── Documentation ─────────────────────────────────────────────────────────────

const README_BODY: &str = r##"A complete structure for generative AI projects.

## Project Structure

```
.
├── config/              # Model and logging configuration
├── data/               # Data (cache, embeddings, vectordb)
├── src/                # Source code
│   ├── core/          # LLM abstractions and integrations
│   ├── prompts/       # Templates and prompt chaining
│   ├── rag/           # Retrieval Augmented Generation
│   ├── processing/    # Text processing
│   └── inference/     # Inference orchestration
├── docs/              # Documentation
└── scripts/           # Utility scripts
```

## Installation

```bash
uv pip install -r requirements.txt
```

Or with uv sync (recommended):

```bash
uv sync
```

## Usage

```bash
uv run main.py
```

## Configuration

Modify the files in the `config/` folder to adapt the parameters to your needs.
"##;

const SETUP_DOC: &str = r##"# Installation and Setup

## Prerequisites

- Python 3.8+
- [uv](https://github.com/astral-sh/uv) (fast Python package installer)

## Install uv

```bash
curl -LsSf https://astral.sh/uv/install.sh | sh
```

## Install dependencies

Using uv sync (recommended):

```bash
uv sync
```

Or manually:

```bash
uv pip install -r requirements.txt
```

## Environment variables configuration

Create a `.env` file:

```
OPENAI_API_KEY=your-key
ANTHROPIC_API_KEY=your-key
```

## Initialization

Run the application using uv:

```bash
uv run main.py
```

## Development

To create a virtual environment with uv:

```bash
uv venv
source .venv/bin/activate
```

To add new dependencies:

```bash
uv pip install <package_name>
```
"##;

// ── Metadata ──────────────────────────────────────────────────────────────────

const GITIGNORE: &str = r##"__pycache__/
*.py[cod]
*$py.class
*.so
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg

# Virtual environments
venv/
ENV/
env/

# IDE
.vscode/
.idea/
*.swp
*.swo

# Environment
.env
.env.local

# Data
data/cache/
data/embeddings/
data/vectordb/

# OS
.DS_Store
Thumbs.db
"##;

const REQUIREMENTS: &str = r##"python-dotenv==1.0.0
pyyaml==6.0
openai==1.0.0
anthropic==0.7.0
requests==2.31.0
pytest>=7.0
black>=23.0
ruff>=0.1.0
"##;

const ENV_EXAMPLE: &str = r##"# API Keys
OPENAI_API_KEY=your-openai-api-key
ANTHROPIC_API_KEY=your-anthropic-api-key

# Configuration
LOG_LEVEL=INFO
MODEL_TYPE=gpt
"##;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn directory_list_is_fixed() {
        assert_eq!(DIRECTORIES.len(), 11);
        assert!(DIRECTORIES.contains(&"data/vectordb"));
        assert!(DIRECTORIES.contains(&"scripts"));
    }

    #[test]
    fn all_files_have_unique_paths() {
        let files = all_files("demo");
        let paths: HashSet<_> = files.iter().map(|f| f.path).collect();
        assert_eq!(paths.len(), files.len(), "duplicate template path");
    }

    #[test]
    fn every_file_has_content() {
        for file in all_files("demo") {
            assert!(!file.content.is_empty(), "{} is empty", file.path);
        }
    }

    #[test]
    fn the_four_groups_touch_disjoint_paths() {
        let groups = [
            config_files(),
            source_files(),
            doc_files("demo"),
            meta_files("demo"),
        ];
        let mut seen = HashSet::new();
        for group in &groups {
            for file in group {
                assert!(seen.insert(file.path), "{} in two groups", file.path);
            }
        }
    }

    #[test]
    fn project_name_lands_in_manifest_and_readme() {
        let meta = meta_files("rag_demo");
        let manifest = meta.iter().find(|f| f.path == "pyproject.toml").unwrap();
        assert!(manifest.content.contains("name = \"rag_demo\""));

        let docs = doc_files("rag_demo");
        let readme = docs.iter().find(|f| f.path == "docs/README.md").unwrap();
        assert!(readme.content.starts_with("# rag_demo\n"));
    }

    #[test]
    fn source_stub_count_matches_template() {
        // 16 stubs under src/ plus the entry point.
        assert_eq!(source_files().len(), 17);
    }

    #[test]
    fn every_parent_directory_is_in_the_directory_list_or_root() {
        let dirs: HashSet<&str> = DIRECTORIES.iter().copied().collect();
        for file in all_files("demo") {
            if let Some((parent, _)) = file.path.rsplit_once('/') {
                assert!(dirs.contains(parent), "{} has no parent dir entry", file.path);
            }
        }
    }
}
