//! UX guideline content for the full-page guidelines view.
//!
//! # Design
//! - Sections are an enum so the view can hold a single `Option` of the
//!   expanded one; the default expanded section is exposed as a constant.
//! - Body content is grouped per section in plain tables.

use serde::Serialize;

use crate::{GuideNote, ListBlock, Named};

/// Collapsible sections of the guidelines view, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuidelineSection {
    /// Why adopt a design system.
    WhyDesignSystem,
    /// WCAG 2.1 principles.
    Accessibility,
    /// UX fundamentals.
    Fundamentals,
    /// Nielsen heuristics.
    Heuristics,
    /// Design process phases.
    Process,
    /// Quality checklist.
    Checklist,
    /// Outbound references.
    References,
}

impl GuidelineSection {
    /// Section initially expanded when the view opens.
    pub const INITIAL: Self = Self::WhyDesignSystem;

    /// Sections in display order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::WhyDesignSystem,
            Self::Accessibility,
            Self::Fundamentals,
            Self::Heuristics,
            Self::Process,
            Self::Checklist,
            Self::References,
        ]
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::WhyDesignSystem => "why-design-system",
            Self::Accessibility => "accessibility",
            Self::Fundamentals => "fundamentals",
            Self::Heuristics => "heuristics",
            Self::Process => "process",
            Self::Checklist => "checklist",
            Self::References => "references",
        }
    }

    /// Section heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::WhyDesignSystem => "Por que um Sistema de Design?",
            Self::Accessibility => "Diretrizes de Acessibilidade WCAG 2.1",
            Self::Fundamentals => "Fundamentos UX",
            Self::Heuristics => "10 Heurísticas de Nielsen",
            Self::Process => "Processo de Design",
            Self::Checklist => "Checklist de Qualidade UX",
            Self::References => "Referências e Fontes",
        }
    }
}

/// Outbound reference link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ReferenceLink {
    /// Article title.
    pub title: &'static str,
    /// Absolute URL.
    pub url: &'static str,
    /// One-line summary.
    pub description: &'static str,
}

impl Named for ReferenceLink {
    fn name(&self) -> &'static str {
        self.title
    }
}

/// A recommended tool and its role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ToolEntry {
    /// Tool name.
    pub name: &'static str,
    /// Role tag.
    pub tag: &'static str,
    /// Whether the tag is highlighted.
    pub featured: bool,
}

/// Tools grouped by purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ToolGroup {
    /// Group heading.
    pub title: &'static str,
    /// Tools in the group.
    pub tools: &'static [ToolEntry],
}

/// Intro shown above the benefit cards.
pub const WHY_INTRO: &str = "Um design system é fundamental para criar experiências digitais consistentes, eficientes e escaláveis. Segundo pesquisas do Nielsen Norman Group, produtos com sistemas de design bem implementados têm:";

/// Measured benefits of adopting a design system.
pub const DESIGN_SYSTEM_BENEFITS: &[GuideNote] = &[
    GuideNote {
        title: "38% menos ritmo de desenvolvimento",
        body: "Componentes reutilizáveis aceleram o processo",
    },
    GuideNote {
        title: "52% de redução de bugs de interface",
        body: "Padrões testados garantem qualidade",
    },
    GuideNote {
        title: "47% de melhoria na experiência do usuário",
        body: "Interface consistente reduz a curva de aprendizado",
    },
    GuideNote {
        title: "34% economia em manutenção",
        body: "Centralização facilita atualizações",
    },
];

/// Intro shown above the WCAG principles.
pub const WCAG_INTRO: &str = "Seguimos rigorosamente as diretrizes WCAG 2.1 nível AA para garantir acessibilidade universal:";

/// The four WCAG principles.
pub const WCAG_PRINCIPLES: &[ListBlock] = &[
    ListBlock {
        title: "Perceptível",
        items: &[
            "Contraste mínimo de 4.5:1 para texto normal",
            "Contraste mínimo 3:1 para texto grande",
            "Alternativas textuais para imagens",
            "Conteúdo adaptável a diferentes apresentações",
        ],
    },
    ListBlock {
        title: "Operável",
        items: &[
            "Navegação por teclado completa",
            "Área de toque mínima 44x44px",
            "Sem conteúdo piscante excessivo",
            "Tempo suficiente para interações",
        ],
    },
    ListBlock {
        title: "Compreensível",
        items: &[
            "Linguagem clara e simples",
            "Comportamento previsível",
            "Assistência na entrada de dados",
            "Identificação e correção de erros",
        ],
    },
    ListBlock {
        title: "Robusto",
        items: &[
            "Compatibilidade com tecnologias assistivas",
            "Código semântico válido",
            "Atributos ARIA seguros",
            "Testado com leitores de tela",
        ],
    },
];

/// ARIA attribute cheat sheet.
pub const ARIA_PRACTICES: &[ListBlock] = &[
    ListBlock {
        title: "Labels e Descrições",
        items: &[
            "aria-label para elementos sem texto",
            "aria-labelledby para referências",
            "aria-describedby para informações extras",
            "role para definir função do elemento",
        ],
    },
    ListBlock {
        title: "Estados e Propriedades",
        items: &[
            "aria-expanded para elementos expansíveis",
            "aria-selected para seleções",
            "aria-hidden para conteúdo decorativo",
            "aria-live para atualizações dinâmicas",
        ],
    },
];

/// UX fundamentals.
pub const UX_FUNDAMENTALS: &[GuideNote] = &[
    GuideNote {
        title: "Centrado no Usuário",
        body: "Todas as decisões de design devem ser baseadas nas necessidades reais dos usuários, validadas através de pesquisa e testes de usabilidade.",
    },
    GuideNote {
        title: "Simplicidade",
        body: "Menos é mais. Remova elementos desnecessários e mantenha apenas o essencial para que o usuário complete suas tarefas com eficiência.",
    },
    GuideNote {
        title: "Consistência",
        body: "Mantenha padrões visuais e comportamentais em toda a interface. Elementos similares devem ter aparência e comportamento similares.",
    },
    GuideNote {
        title: "Acessibilidade",
        body: "Design inclusivo que funciona para todos, independente de habilidades, dispositivos ou contextos de uso.",
    },
];

/// Nielsen's ten usability heuristics.
pub const NIELSEN_HEURISTICS: &[GuideNote] = &[
    GuideNote {
        title: "1. Visibilidade do Status do Sistema",
        body: "Mantenha os usuários informados sobre o que está acontecendo através de feedback apropriado.",
    },
    GuideNote {
        title: "2. Correspondência entre Sistema e Mundo Real",
        body: "Use linguagem familiar e conceitos que os usuários já conhecem do mundo real.",
    },
    GuideNote {
        title: "3. Controle e Liberdade do Usuário",
        body: "Forneça saídas claras para situações indesejadas, com desfazer e refazer.",
    },
    GuideNote {
        title: "4. Consistência e Padrões",
        body: "Siga convenções estabelecidas e mantenha consistência em toda a interface.",
    },
    GuideNote {
        title: "5. Prevenção de Erros",
        body: "Design que previne problemas antes que eles ocorram.",
    },
    GuideNote {
        title: "6. Reconhecimento ao invés de Lembrança",
        body: "Torne objetos, ações e opções visíveis para reduzir carga cognitiva.",
    },
    GuideNote {
        title: "7. Flexibilidade e Eficiência de Uso",
        body: "Permita personalização para usuários experientes sem prejudicar iniciantes.",
    },
    GuideNote {
        title: "8. Design Estético e Minimalista",
        body: "Diálogos não devem conter informação irrelevante ou raramente necessária.",
    },
    GuideNote {
        title: "9. Ajuda Usuários a Reconhecer, Diagnosticar e Recuperar de Erros",
        body: "Mensagens de erro em linguagem simples que indicam o problema e sugerem soluções.",
    },
    GuideNote {
        title: "10. Ajuda e Documentação",
        body: "Forneça informação que pode ser facilmente pesquisada e focada na tarefa do usuário.",
    },
];

/// Design process phases, in order.
pub const DESIGN_PROCESS: &[GuideNote] = &[
    GuideNote {
        title: "Descoberta",
        body: "Pesquisa de usuários, análise de requisitos, definição de problemas",
    },
    GuideNote {
        title: "Ideação",
        body: "Brainstorming, sketches, wireframes, arquitetura da informação",
    },
    GuideNote {
        title: "Prototipação",
        body: "Protótipos de baixa e alta fidelidade, testes de conceito",
    },
    GuideNote {
        title: "Teste",
        body: "Testes de usabilidade, validação com usuários reais",
    },
    GuideNote {
        title: "Implementação",
        body: "Desenvolvimento, documentação, handoff para dev",
    },
    GuideNote {
        title: "Iteração",
        body: "Análise de métricas, feedback dos usuários, melhorias contínuas",
    },
];

/// Quality checklist groups.
pub const QUALITY_CHECKLIST: &[ListBlock] = &[
    ListBlock {
        title: "Usabilidade",
        items: &[
            "Navegação intuitiva e clara",
            "Feedback visual para todas as ações",
            "Tempo de carregamento otimizado",
            "Formulários simples e diretos",
            "Mensagens de erro úteis",
        ],
    },
    ListBlock {
        title: "Acessibilidade",
        items: &[
            "Contraste adequado (WCAG AA)",
            "Navegação por teclado",
            "Textos alternativos em imagens",
            "Hierarquia de títulos correta",
            "Foco visível em elementos interativos",
        ],
    },
    ListBlock {
        title: "Performance",
        items: &[
            "Imagens otimizadas",
            "Lazy loading implementado",
            "CSS e JS minificados",
            "Cache adequadamente configurado",
            "Responsividade testada",
        ],
    },
    ListBlock {
        title: "Conteúdo",
        items: &[
            "Linguagem clara e objetiva",
            "Hierarquia visual bem definida",
            "Call-to-actions evidentes",
            "Informações organizadas logicamente",
            "Microtextos úteis e orientativos",
        ],
    },
];

/// Intro shown above the reference links.
pub const REFERENCES_INTRO: &str =
    "Fontes essenciais para aprofundar conhecimentos em UX Design e Design Systems:";

/// Outbound references.
pub const REFERENCE_LINKS: &[ReferenceLink] = &[
    ReferenceLink {
        title: "Design Systems 101: What is a Design System?",
        url: "https://www.figma.com/blog/design-systems-101-what-is-a-design-system/",
        description: "Guia completo da Figma sobre fundamentos de design systems",
    },
    ReferenceLink {
        title: "User Interface Design Guidelines: 10 Rules of Thumb",
        url: "https://www.interaction-design.org/literature/article/user-interface-design-guidelines-10-rules-of-thumb",
        description: "Diretrizes essenciais para design de interface do usuário",
    },
    ReferenceLink {
        title: "Typography Guides",
        url: "https://www.designsystems.com/typography-guides/",
        description: "Melhores práticas para tipografia em design systems",
    },
    ReferenceLink {
        title: "Como as Heurísticas de Nielsen podem ajudar a desenvolver o Design System",
        url: "https://brasil.uxdesign.cc/como-as-heur%C3%ADsticas-de-nielsen-podem-ajudar-a-desenvolver-o-design-system-a6a943bf9d55",
        description: "Aplicação das heurísticas de Nielsen em design systems",
    },
    ReferenceLink {
        title: "Design Systems 101",
        url: "https://www.nngroup.com/articles/design-systems-101/",
        description: "Fundamentos de design systems pelo Nielsen Norman Group",
    },
];

/// Book recommendations.
pub const FURTHER_READING: &[&str] = &[
    "\"Don't Make Me Think\" - Steve Krug",
    "\"The Design of Everyday Things\" - Don Norman",
    "\"Atomic Design\" - Brad Frost",
    "\"Design Systems\" - Alla Kholmatova",
];

/// Success metrics.
pub const SUCCESS_METRICS: &[ListBlock] = &[
    ListBlock {
        title: "Métricas de Tarefa",
        items: &[
            "Taxa de conclusão de tarefas",
            "Tempo para completar tarefa",
            "Taxa de erro",
            "Cliques para conclusão",
        ],
    },
    ListBlock {
        title: "Métricas de Engajamento",
        items: &[
            "Tempo na página",
            "Taxa de retorno",
            "Páginas por sessão",
            "Taxa de conversão",
        ],
    },
    ListBlock {
        title: "Métricas de Satisfação",
        items: &[
            "Net Promoter Score (NPS)",
            "Customer Satisfaction (CSAT)",
            "System Usability Scale (SUS)",
            "Feedback qualitativo",
        ],
    },
];

/// Recommended tooling.
pub const RECOMMENDED_TOOLS: &[ToolGroup] = &[
    ToolGroup {
        title: "Design & Prototipação",
        tools: &[
            ToolEntry {
                name: "Figma",
                tag: "Recomendado",
                featured: true,
            },
            ToolEntry {
                name: "Sketch",
                tag: "Alternativa",
                featured: false,
            },
            ToolEntry {
                name: "Adobe XD",
                tag: "Alternativa",
                featured: false,
            },
        ],
    },
    ToolGroup {
        title: "Testes & Analytics",
        tools: &[
            ToolEntry {
                name: "Hotjar",
                tag: "Heatmaps",
                featured: true,
            },
            ToolEntry {
                name: "Google Analytics",
                tag: "Métricas",
                featured: true,
            },
            ToolEntry {
                name: "UsabilityHub",
                tag: "Testes",
                featured: false,
            },
        ],
    },
];

/// Stable id for one checklist item, used as the checkbox key.
#[must_use]
pub fn checklist_item_id(group: usize, item: usize) -> String {
    format!("check-{group}-{item}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_section_is_first() {
        assert_eq!(GuidelineSection::INITIAL, GuidelineSection::all()[0]);
        assert_eq!(GuidelineSection::INITIAL.id(), "why-design-system");
    }

    #[test]
    fn there_are_ten_heuristics_and_six_phases() {
        assert_eq!(NIELSEN_HEURISTICS.len(), 10);
        assert_eq!(DESIGN_PROCESS.len(), 6);
    }

    #[test]
    fn references_are_https() {
        assert!(REFERENCE_LINKS.iter().all(|link| link.url.starts_with("https://")));
    }

    #[test]
    fn checklist_ids_are_distinct() {
        let mut ids = Vec::new();
        for (group, block) in QUALITY_CHECKLIST.iter().enumerate() {
            for item in 0..block.items.len() {
                ids.push(checklist_item_id(group, item));
            }
        }
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
