//! Built-in scenario: the same authentication feature delivered through a
//! traditional sequential handoff process and a parallelized agentic one.

use crate::schema::{Role, Scenario, Step};

impl Scenario {
    /// The bundled user-authentication scenario.
    ///
    /// Guaranteed to pass [`Scenario::validate`]; the simulator can consume it
    /// without re-checking.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            traditional: traditional_steps(),
            agentic: agentic_steps(),
        }
    }
}

fn traditional_steps() -> Vec<Step> {
    vec![
        Step::new(
            "trad-1",
            Role::Product,
            "Initial Requirements Gathering",
            "PM meets with stakeholders to understand auth needs",
            5.0,
        )
        .with_details(
            "Series of meetings scheduled over 3 days. Notes scattered across email, Slack, and \
             meeting recordings.",
        ),
        Step::new(
            "trad-2",
            Role::Product,
            "Market Research",
            "PM manually researches competitor auth solutions",
            4.0,
        )
        .with_details(
            "Manually browse competitor sites, create comparison spreadsheet, read industry \
             reports.",
        ),
        Step::new(
            "trad-3",
            Role::Product,
            "Write PRD",
            "PM writes detailed Product Requirements Document",
            6.0,
        )
        .with_artifacts(["PRD: User Authentication System v1.0"])
        .with_details(
            "15-page document with user stories, acceptance criteria, edge cases. Took 2 days to \
             write.",
        ),
        Step::new(
            "trad-4",
            Role::Product,
            "PRD Review & Revisions",
            "Stakeholder feedback and document updates",
            3.0,
        )
        .with_artifacts(["PRD: User Authentication System v1.3"])
        .with_details("Three rounds of feedback. Document grows to 22 pages."),
        Step::new(
            "trad-5",
            Role::Design,
            "PRD Handoff Meeting",
            "Designer receives PRD and asks clarifying questions",
            2.0,
        )
        .with_details(
            "1-hour meeting. Designer realizes some edge cases weren't considered. Needs \
             follow-up.",
        ),
        Step::new(
            "trad-6",
            Role::Design,
            "Initial Sketches",
            "Designer creates rough sketches of auth flows",
            4.0,
        )
        .with_details("Pen and paper, then digitized in Figma. Multiple iterations on flow logic."),
        Step::new(
            "trad-7",
            Role::Design,
            "Low-Fidelity Wireframes",
            "Convert sketches to clickable wireframes",
            5.0,
        )
        .with_artifacts(["Wireframes: Login, Signup, Password Reset"])
        .with_details("Basic layouts created. Shared with PM for feedback."),
        Step::new(
            "trad-8",
            Role::Design,
            "High-Fidelity Mockups",
            "Designer creates pixel-perfect designs",
            8.0,
        )
        .with_artifacts(["High-Fidelity Mockups", "Design System Updates"])
        .with_details(
            "Colors, typography, spacing. Multiple screens for different states. Design system \
             extended with new components.",
        ),
        Step::new(
            "trad-9",
            Role::Design,
            "Design Review",
            "Stakeholder design review and iterations",
            4.0,
        )
        .with_artifacts(["Final Mockups v2.1"])
        .with_details("CEO wants different button colors. Two more iterations."),
        Step::new(
            "trad-10",
            Role::Engineering,
            "Design Handoff",
            "Engineer receives designs and reviews specs",
            2.0,
        )
        .with_details("Realizes some interactions weren't specified. Slack thread with designer."),
        Step::new(
            "trad-11",
            Role::Engineering,
            "Technical Planning",
            "Architect database schema and API endpoints",
            5.0,
        )
        .with_details("Choose auth library, plan database migrations, design API."),
        Step::new(
            "trad-12",
            Role::Engineering,
            "Backend Implementation",
            "Build authentication API and database",
            10.0,
        )
        .with_artifacts(["Auth API Endpoints", "User Schema"])
        .with_details("JWT tokens, password hashing, session management, email verification."),
        Step::new(
            "trad-13",
            Role::Engineering,
            "Frontend Implementation",
            "Build UI components and forms",
            8.0,
        )
        .with_artifacts(["Login Component", "Signup Flow", "Password Reset"])
        .with_details("React components, form validation, error handling, loading states."),
        Step::new(
            "trad-14",
            Role::Engineering,
            "Write Tests",
            "Create unit and integration tests",
            6.0,
        )
        .with_details(
            "Unit tests for utils, integration tests for API, e2e tests for critical flows.",
        ),
        Step::new(
            "trad-15",
            Role::Engineering,
            "Code Review",
            "PR review and addressing feedback",
            3.0,
        )
        .with_details(
            "Two rounds of review. Nitpicks about variable names. One architectural concern.",
        ),
        Step::new(
            "trad-16",
            Role::Engineering,
            "QA & Bug Fixes",
            "QA testing reveals edge cases",
            5.0,
        )
        .with_artifacts(["Bug Fixes", "Updated Tests"])
        .with_details("8 bugs found. Password reset email broken in production mode. Fixed."),
        Step::new(
            "trad-17",
            Role::Engineering,
            "Deployment",
            "Deploy to production",
            2.0,
        )
        .with_artifacts(["Production Deployment"])
        .with_details("Staged rollout. Monitoring dashboards. No critical issues."),
    ]
}

fn agentic_steps() -> Vec<Step> {
    vec![
        Step::new(
            "agent-1",
            Role::Product,
            "Conversational Requirements Capture",
            "PM has natural conversation with AI to draft PRD",
            2.0,
        )
        .with_details(
            "15-minute conversation. AI asks clarifying questions, suggests edge cases PM hadn't \
             considered.",
        ),
        Step::new(
            "agent-2",
            Role::Product,
            "Automated Discovery",
            "Agents run parallel competitive analysis & data pull",
            1.5,
        )
        .with_artifacts([
            "Competitive Analysis Report",
            "Usage Pattern Data",
            "Security Best Practices",
        ])
        .with_details(
            "Agents simultaneously: analyze 15 competitor auth flows, pull internal usage data, \
             research OWASP guidelines. PM reviews in minutes, not days.",
        ),
        Step::new(
            "agent-3",
            Role::Product,
            "Solution Exploration",
            "AI generates 3 solution approaches with tradeoffs",
            1.0,
        )
        .with_artifacts([
            "Option A: OAuth + Social",
            "Option B: Passwordless Magic Links",
            "Option C: Traditional + 2FA",
        ])
        .with_details(
            "Each option includes: implementation complexity, security posture, user friction, \
             cost estimate. PM chooses Option C.",
        ),
        Step::new(
            "agent-4",
            Role::Product,
            "PRD Finalization",
            "PM validates AI-generated PRD and test scenarios",
            1.5,
        )
        .with_artifacts(["PRD v1.0 (AI-Generated)", "Test Scenarios", "Edge Cases"])
        .with_details(
            "PM focuses on strategic validation, stakeholder alignment. Document is already \
             comprehensive.",
        ),
        Step::new(
            "agent-5",
            Role::Design,
            "Design Variation Generation",
            "AI generates 4 design variations from PRD",
            1.0,
        )
        .with_artifacts([
            "Variant A: Minimal",
            "Variant B: Premium",
            "Variant C: Playful",
            "Variant D: Enterprise",
        ])
        .with_details(
            "Instant generation of interactive prototypes. Each variant follows design system.",
        ),
        Step::new(
            "agent-6",
            Role::Design,
            "Automated Accessibility Audit",
            "AI checks all variants for WCAG compliance",
            0.5,
        )
        .with_details(
            "Color contrast, keyboard navigation, screen reader support. Issues flagged \
             immediately.",
        ),
        Step::new(
            "agent-7",
            Role::Design,
            "Component Library Integration",
            "AI suggests existing components, generates new ones",
            1.0,
        )
        .with_artifacts(["Component Mappings", "New Components Needed"])
        .with_details(
            "Reuses 80% of existing design system. Proposes 3 new components for design system.",
        ),
        Step::new(
            "agent-8",
            Role::Design,
            "Design Curation",
            "Designer selects best elements, ensures brand coherence",
            2.0,
        )
        .with_artifacts(["Final Design (Curated)", "Interactive Prototype"])
        .with_details(
            "Designer becomes curator: chooses Variant B layout, Variant D form styling, custom \
             loading states.",
        ),
        Step::new(
            "agent-9",
            Role::Engineering,
            "Implementation Options",
            "AI generates 2 implementation approaches",
            0.5,
        )
        .with_artifacts(["Approach A: Next-Auth", "Approach B: Custom + Supabase"])
        .with_details(
            "Each includes: file structure, dependencies, migration plan. Engineer chooses \
             Approach A.",
        ),
        Step::new(
            "agent-10",
            Role::Engineering,
            "Architecture Review",
            "Engineer validates AI architecture decisions",
            1.5,
        )
        .with_details(
            "Focus on: scalability, security model, integration with existing auth. Approves with \
             minor tweaks.",
        ),
        Step::new(
            "agent-11",
            Role::Engineering,
            "Code Generation",
            "AI implements backend & frontend simultaneously",
            2.0,
        )
        .with_artifacts([
            "API Implementation",
            "Frontend Components",
            "Database Schema",
            "Tests",
        ])
        .with_details(
            "Parallel generation: API endpoints, React components, migration scripts, unit tests, \
             e2e tests.",
        ),
        Step::new(
            "agent-12",
            Role::Engineering,
            "Code Review & Refinement",
            "Engineer reviews AI code, focuses on architecture",
            2.0,
        )
        .with_details(
            "No \"const vs let\" comments. Focus on: abstraction quality, error boundaries, rate \
             limiting strategy.",
        ),
        Step::new(
            "agent-13",
            Role::Engineering,
            "Automated Testing & CI",
            "AI-generated tests run, self-healing CI fixes issues",
            1.0,
        )
        .with_artifacts(["Test Suite (96% coverage)", "CI/CD Pipeline"])
        .with_details(
            "Tests pass. One flaky test auto-fixed by CI agent. Coverage report generated.",
        ),
        Step::new(
            "agent-14",
            Role::Engineering,
            "Deployment & Monitoring",
            "Automated deployment with real-time documentation",
            1.0,
        )
        .with_artifacts(["Production Deployment", "Live Documentation"])
        .with_details(
            "Staged rollout. Docs auto-updated. Monitoring configured. Engineer watches \
             dashboards.",
        ),
    ]
}
