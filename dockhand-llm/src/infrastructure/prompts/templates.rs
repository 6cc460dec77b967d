use dockhand_core::domain::RepositoryAnalysis;

pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are an expert software architect and DevOps engineer.
Analyze the provided repository structure and files to extract:
1. Project Overview (name, description, purpose, domain, complexity 1-10)
2. Technology Stack (framework, language, database, runtime, package_manager, dependencies)
3. System Architecture (type, modules, patterns, key_features)

CRITICAL: Return ONLY valid JSON without any markdown formatting, code blocks, or additional text.
Your response must start with { and end with } and be valid JSON."#;

pub const ANALYSIS_USER_PROMPT: &str = r#"Repository Name: {repo_name}
Repository Structure: {structure}

Key Files Content: {file_contents}

Please analyze this repository and return a JSON response with this exact structure:
{
    "project_overview": {
        "name": "{repo_name}",
        "description": "detailed description from README or analysis",
        "purpose": "main purpose of the application",
        "domain": "Backend/API or Frontend/Web or Mobile or IoT/Hardware or AI/ML or Gaming or General Software",
        "complexity_score": 1-10
    },
    "technical_architecture": {
        "technology_stack": {
            "framework": "detected framework or null",
            "language": "primary programming language",
            "database": "detected database or null",
            "runtime": "runtime environment",
            "package_manager": "package manager used",
            "dependencies": ["All dependencies"]
        },
        "system_architecture": {
            "architecture_type": "Monolithic or Microservices or Modular or Layered",
            "modules": ["detected modules/components"],
            "key_features": ["main features of the system"],
            "patterns": ["architectural patterns used"]
        }
    }
}"#;

pub const DOCKERFILE_SYSTEM_PROMPT: &str = r#"You are a Docker expert. Generate production-ready, multi-stage Dockerfiles.
Create optimized Dockerfiles with:
- Multi-stage builds (development and production)
- Security best practices (non-root user)
- Health checks
- Proper dependency management
- Technology-specific optimizations

Return JSON with 'content' (the Dockerfile) and 'explanation' (brief description)."#;

pub const DOCKERFILE_USER_PROMPT: &str = r##"Generate a Dockerfile for this project:

Language: {language}
Framework: {framework}
Runtime: {runtime}
Package Manager: {package_manager}
Dependencies: {dependencies}

Project: {name}
Domain: {domain}

Return JSON format:
{
    "content": "# Multi-stage Dockerfile content here...",
    "explanation": "Brief explanation of the Dockerfile"
}"##;

pub const COMPOSE_SYSTEM_PROMPT: &str = r#"You are a Docker Compose expert. Generate production-ready docker-compose.yml files.
Include:
- Main application service
- Database service (if needed)
- Redis for caching
- Proper networking
- Health checks
- Environment variables
- Volume management

Return JSON with 'content' (docker-compose.yml) and 'services' (list of services)."#;

pub const COMPOSE_USER_PROMPT: &str = r#"Generate docker-compose.yml for:

Project: {name}
Language: {language}
Framework: {framework}
Database: {database}
Domain: {domain}

Return JSON format:
{
    "content": "version: '3.8'\nservices:\n  app:\n    ...",
    "services": ["app", "database", "redis"]
}"#;

pub const WORKFLOW_SYSTEM_PROMPT: &str = r#"You are a CI/CD expert. Generate comprehensive GitHub Actions workflows.
Include:
- Code quality checks (linting, formatting)
- Testing (unit, integration)
- Security scanning
- Docker builds
- Multi-platform support
- Deployment stages

Return JSON with 'content' (workflow YAML) and 'features' (list of features)."#;

pub const WORKFLOW_USER_PROMPT: &str = r#"Generate GitHub Actions workflow for:

Project: {name}
Language: {language}
Framework: {framework}
Package Manager: {package_manager}
Domain: {domain}

Return JSON format:
{
    "content": "name: CI/CD Pipeline\non:\n  push:\n    ...",
    "features": ["Code Quality", "Testing", "Docker Build", "Security Scan"]
}"#;

pub const KUBERNETES_SYSTEM_PROMPT: &str = r#"You are a Kubernetes expert. Generate production-ready Kubernetes manifests.
Include:
- Deployment with resource requests/limits and liveness/readiness probes
- Service exposing the application
- ConfigMap for non-secret configuration
- Horizontal Pod Autoscaler where it makes sense

Return JSON with 'explanation' (brief description) and 'items' (list of files, each with 'path' and 'content')."#;

pub const KUBERNETES_USER_PROMPT: &str = r#"Generate Kubernetes manifests for:

Project: {name}
Language: {language}
Framework: {framework}
Database: {database}
Domain: {domain}

Return JSON format:
{
    "explanation": "Brief explanation of the manifests",
    "items": [
        {"path": "k8s/deployment.yaml", "content": "apiVersion: apps/v1\nkind: Deployment\n..."},
        {"path": "k8s/service.yaml", "content": "apiVersion: v1\nkind: Service\n..."}
    ]
}"#;

pub const PR_DESCRIPTION_SYSTEM_PROMPT: &str =
    "You are a technical writer. Create professional PR descriptions.";

pub const PR_DESCRIPTION_USER_PROMPT: &str = r#"Create a comprehensive pull request description for dockerization of {name}.

Project Details:
- Language: {language}
- Framework: {framework}
- Domain: {domain}
- Complexity: {complexity}/10

Include:
- Executive summary
- Technical details added
- Setup instructions
- Benefits of containerization"#;

pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build_analysis_prompt(repo_name: &str, structure: &str, file_contents: &str) -> String {
        ANALYSIS_USER_PROMPT
            .replace("{repo_name}", repo_name)
            .replace("{structure}", structure)
            .replace("{file_contents}", file_contents)
    }

    pub fn build_dockerfile_prompt(analysis: &RepositoryAnalysis) -> String {
        let stack = &analysis.technical_architecture.technology_stack;
        DOCKERFILE_USER_PROMPT
            .replace("{language}", &stack.language)
            .replace("{framework}", stack.framework.as_deref().unwrap_or("none"))
            .replace("{runtime}", stack.runtime.as_deref().unwrap_or("unknown"))
            .replace(
                "{package_manager}",
                stack.package_manager.as_deref().unwrap_or("unknown"),
            )
            .replace("{dependencies}", &stack.dependencies.join(", "))
            .replace("{name}", &analysis.project_overview.name)
            .replace("{domain}", Self::domain_of(analysis))
    }

    pub fn build_compose_prompt(analysis: &RepositoryAnalysis) -> String {
        let stack = &analysis.technical_architecture.technology_stack;
        COMPOSE_USER_PROMPT
            .replace("{name}", &analysis.project_overview.name)
            .replace("{language}", &stack.language)
            .replace("{framework}", stack.framework.as_deref().unwrap_or("none"))
            .replace("{database}", stack.database.as_deref().unwrap_or("none"))
            .replace("{domain}", Self::domain_of(analysis))
    }

    pub fn build_workflow_prompt(analysis: &RepositoryAnalysis) -> String {
        let stack = &analysis.technical_architecture.technology_stack;
        WORKFLOW_USER_PROMPT
            .replace("{name}", &analysis.project_overview.name)
            .replace("{language}", &stack.language)
            .replace("{framework}", stack.framework.as_deref().unwrap_or("none"))
            .replace(
                "{package_manager}",
                stack.package_manager.as_deref().unwrap_or("unknown"),
            )
            .replace("{domain}", Self::domain_of(analysis))
    }

    pub fn build_kubernetes_prompt(analysis: &RepositoryAnalysis) -> String {
        let stack = &analysis.technical_architecture.technology_stack;
        KUBERNETES_USER_PROMPT
            .replace("{name}", &analysis.project_overview.name)
            .replace("{language}", &stack.language)
            .replace("{framework}", stack.framework.as_deref().unwrap_or("none"))
            .replace("{database}", stack.database.as_deref().unwrap_or("none"))
            .replace("{domain}", Self::domain_of(analysis))
    }

    pub fn build_pr_description_prompt(analysis: &RepositoryAnalysis) -> String {
        let stack = &analysis.technical_architecture.technology_stack;
        PR_DESCRIPTION_USER_PROMPT
            .replace("{name}", &analysis.project_overview.name)
            .replace("{language}", &stack.language)
            .replace("{framework}", stack.framework.as_deref().unwrap_or("N/A"))
            .replace("{domain}", Self::domain_of(analysis))
            .replace(
                "{complexity}",
                &analysis.project_overview.complexity_score.to_string(),
            )
    }

    fn domain_of(analysis: &RepositoryAnalysis) -> &str {
        analysis
            .project_overview
            .domain
            .as_deref()
            .unwrap_or("General Software")
    }
}
