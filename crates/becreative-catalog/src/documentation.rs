//! Usage manual content for the documentation view.
//!
//! Sections are built from a small set of block kinds so the renderer can
//! stay generic over the content.

use serde::Serialize;

use crate::Named;

/// Version shown in the manual footer.
pub const DOC_VERSION: &str = "v1.0.0";

/// Product name shown in the manual header and footer.
pub const PRODUCT_NAME: &str = "Design System Bê Creative";

/// Sections of the manual, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocSectionId {
    /// Getting started.
    Intro,
    /// Applying colors.
    Colors,
    /// Button hierarchy.
    Buttons,
    /// Design tokens.
    Tokens,
    /// Type hierarchy.
    Typography,
    /// Accessibility checklist.
    Accessibility,
    /// Documenting changes.
    Documentation,
}

impl DocSectionId {
    /// Section open when the view first renders.
    pub const INITIAL: Self = Self::Intro;

    /// Stable identifier.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Colors => "colors",
            Self::Buttons => "buttons",
            Self::Tokens => "tokens",
            Self::Typography => "typography",
            Self::Accessibility => "accessibility",
            Self::Documentation => "documentation",
        }
    }
}

/// Accent of a highlighted callout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Neutral information.
    Info,
    /// Positive confirmation.
    Success,
    /// Caution.
    Warning,
    /// Mistakes to avoid.
    Danger,
}

impl Tone {
    /// CSS modifier class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "bc-tone-info",
            Self::Success => "bc-tone-success",
            Self::Warning => "bc-tone-warning",
            Self::Danger => "bc-tone-danger",
        }
    }
}

/// Collapsible code sample with an optional copy payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CodeSample {
    /// Identifier used for the open set and the copied indicator.
    pub id: &'static str,
    /// Trigger label.
    pub trigger: &'static str,
    /// Code displayed when expanded.
    pub code: &'static str,
    /// Text placed on the clipboard when it differs from `code`.
    pub copy_text: Option<&'static str>,
}

impl CodeSample {
    /// Text the copy button writes.
    #[must_use]
    pub fn clipboard_text(&self) -> &'static str {
        self.copy_text.unwrap_or(self.code)
    }
}

/// One renderable content block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocBlock {
    /// Heading followed by a paragraph.
    Text {
        /// Heading, empty for none.
        title: &'static str,
        /// Paragraph.
        body: &'static str,
    },
    /// Bulleted list.
    Bullets {
        /// Heading.
        title: &'static str,
        /// Items.
        items: &'static [&'static str],
    },
    /// Ordered list.
    Steps {
        /// Heading.
        title: &'static str,
        /// Items in order.
        items: &'static [&'static str],
    },
    /// Highlighted box.
    Callout {
        /// Accent.
        tone: Tone,
        /// Heading.
        title: &'static str,
        /// Body.
        body: &'static str,
    },
    /// Term and value pairs.
    Definitions {
        /// Heading.
        title: &'static str,
        /// Pairs in order.
        rows: &'static [(&'static str, &'static str)],
    },
    /// Collapsible code sample.
    Code(CodeSample),
    /// Locally checkable list.
    Checklist {
        /// Heading.
        title: &'static str,
        /// Items as term and explanation.
        items: &'static [(&'static str, &'static str)],
    },
}

/// One manual section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DocSection {
    /// Identifier.
    pub id: DocSectionId,
    /// Heading on the toggle button.
    pub title: &'static str,
    /// Body blocks.
    pub blocks: &'static [DocBlock],
}

impl Named for DocSection {
    fn name(&self) -> &'static str {
        self.title
    }
}

/// Intro paragraph under the manual heading.
pub const DOC_INTRO: &str = "Guia completo sobre como implementar e usar todos os elementos do Design System. Inclui diretrizes de acessibilidade, exemplos práticos e boas práticas.";

/// Footer heading and note.
pub const DOC_FOOTER: (&str, &str) = (
    "Documentação Viva",
    "Este guia evolui constantemente. Sempre consulte a versão mais recente online para atualizações.",
);

const INTRO: &[DocBlock] = &[
    DocBlock::Text {
        title: "Bem-vindo ao Bê Creative Design System",
        body: "Este guia explica como aplicar corretamente todos os elementos do nosso design system. Aqui você encontrará instruções práticas, exemplos de código e diretrizes de acessibilidade.",
    },
    DocBlock::Bullets {
        title: "O que você vai aprender:",
        items: &[
            "Como aplicar cores considerando acessibilidade",
            "Quando usar cada tipo de botão",
            "Como implementar tokens de design",
            "Diretrizes de tipografia e espaçamento",
            "Boas práticas de documentação",
        ],
    },
    DocBlock::Text {
        title: "Para Designers",
        body: "Configure tokens no Figma, aplique componentes consistentes e documente suas decisões.",
    },
    DocBlock::Text {
        title: "Para Desenvolvedores",
        body: "Implemente componentes usando classes CSS e mantenha consistência no código.",
    },
    DocBlock::Callout {
        tone: Tone::Warning,
        title: "Importante",
        body: "Sempre teste suas implementações em diferentes dispositivos e com ferramentas de acessibilidade.",
    },
];

const COLORS: &[DocBlock] = &[
    DocBlock::Bullets {
        title: "Cores Primárias (Purple) - Quando Usar",
        items: &[
            "Botões de ação principal (CTA)",
            "Links importantes",
            "Estados ativos de navegação",
            "Elementos interativos em foco",
        ],
    },
    DocBlock::Code(CodeSample {
        id: "primary-colors",
        trigger: "Ver Implementação CSS",
        code: "/* Light Mode */\n--bc-color-primary: #7c3aed; /* purple-600 */\n--bc-color-primary-hover: #6d28d9; /* purple-700 */\n--bc-color-primary-light: #a855f7; /* purple-500 */\n\n/* Dark Mode */\n--bc-color-primary-dark: #a855f7; /* purple-500 */\n--bc-color-primary-hover-dark: #8b5cf6; /* purple-400 */",
        copy_text: Some("--bc-color-primary: #7c3aed;\n--bc-color-primary-hover: #6d28d9;"),
    }),
    DocBlock::Definitions {
        title: "Cores Neutras - Hierarquia de Texto",
        rows: &[
            ("bc-text-primary", "Títulos e textos principais (contraste 21:1)"),
            ("bc-text-secondary", "Textos de apoio e descrições (contraste 7:1)"),
            ("bc-text-tertiary", "Legendas e informações extras (contraste 4.5:1)"),
        ],
    },
    DocBlock::Callout {
        tone: Tone::Success,
        title: "✓ Acessibilidade",
        body: "Todas as combinações atendem às normas WCAG 2.1 AA para contraste de cores.",
    },
    DocBlock::Definitions {
        title: "Cores de Status - Feedback Visual",
        rows: &[
            ("Sucesso", "Confirmações e estados positivos"),
            ("Erro", "Mensagens de erro e alertas"),
            ("Atenção", "Avisos importantes"),
            ("Informação", "Dicas e informações"),
        ],
    },
    DocBlock::Bullets {
        title: "Evite Estes Erros",
        items: &[
            "Usar cores muito saturadas para textos longos",
            "Combinar cores com contraste insuficiente (menor que 4.5:1)",
            "Usar apenas cor para transmitir informação importante",
            "Misturar mais de 3 cores primárias na mesma interface",
        ],
    },
];

const BUTTONS: &[DocBlock] = &[
    DocBlock::Bullets {
        title: "Botão Primário - Quando usar",
        items: &[
            "Máximo 1 por tela ou seção",
            "Para a ação mais importante (enviar, comprar, confirmar)",
            "Quando você quer guiar o usuário para uma ação específica",
        ],
    },
    DocBlock::Code(CodeSample {
        id: "primary-button",
        trigger: "Ver Código CSS",
        code: "className=\"px-6 py-3 bg-purple-600 text-white rounded-lg\n         hover:bg-purple-700 transition-colors font-medium\n         focus:ring-2 focus:ring-purple-500 focus:ring-offset-2\"",
        copy_text: None,
    }),
    DocBlock::Bullets {
        title: "Botão Secundário - Quando usar",
        items: &[
            "Ações importantes mas não principais",
            "Junto com botões primários (ex: \"Cancelar\" e \"Confirmar\")",
            "Para navegação entre etapas",
        ],
    },
    DocBlock::Definitions {
        title: "Estados dos Botões",
        rows: &[
            ("Normal", "Aparência padrão"),
            ("Hover", "Cor mais escura ao passar o cursor"),
            ("Focus", "Ring de 2px visível para teclado"),
            ("Desabilitado", "Contraste reduzido, sem interação"),
        ],
    },
    DocBlock::Bullets {
        title: "Acessibilidade em Botões",
        items: &[
            "Sempre use focus visível (ring) para navegação por teclado",
            "Mantenha área de toque mínima de 44px (recomendação WCAG)",
            "Use textos descritivos (evite apenas \"Clique aqui\")",
            "States disabled devem ter contraste reduzido mas ainda legível",
        ],
    },
];

const TOKENS: &[DocBlock] = &[
    DocBlock::Text {
        title: "Definição",
        body: "Design tokens são pequenos pedaços de informação que armazenam elementos visuais. Eles garantem consistência entre diferentes plataformas e facilitam mudanças globais.",
    },
    DocBlock::Callout {
        tone: Tone::Info,
        title: "Prefixo \"bc\" (Be Creative):",
        body: "Todos os tokens começam com \"bc-\" para identificar sua origem e evitar conflitos.",
    },
    DocBlock::Definitions {
        title: "Superfícies (Backgrounds)",
        rows: &[
            ("bc-surface-primary", "#ffffff / #1f2937"),
            ("bc-surface-secondary", "#f9fafb / #374151"),
            ("bc-surface-elevated", "#ffffff / #1f2937 + shadow"),
        ],
    },
    DocBlock::Definitions {
        title: "Interação (Botões/Links)",
        rows: &[
            ("bc-interactive-primary", "#7c3aed"),
            ("bc-interactive-primary-hover", "#6d28d9"),
            ("bc-interactive-secondary", "#ffffff"),
        ],
    },
    DocBlock::Definitions {
        title: "Bordas",
        rows: &[
            ("bc-border-default", "#e5e7eb"),
            ("bc-border-focus", "#7c3aed"),
            ("bc-border-error", "#ef4444"),
        ],
    },
    DocBlock::Definitions {
        title: "Tokens de Espaçamento",
        rows: &[
            ("bc-space-xs: 4px", "Entre ícones pequenos"),
            ("bc-space-sm: 8px", "Entre elementos relacionados"),
            ("bc-space-md: 16px", "Entre componentes"),
            ("bc-space-lg: 24px", "Entre seções"),
        ],
    },
    DocBlock::Definitions {
        title: "Tokens de Tipografia",
        rows: &[
            ("bc-text-display", "32px/bold"),
            ("bc-text-title", "24px/semibold"),
            ("bc-text-heading", "20px/medium"),
            ("bc-text-body", "16px/regular"),
            ("bc-text-caption", "14px/regular"),
        ],
    },
    DocBlock::Definitions {
        title: "Por que usar Design Tokens?",
        rows: &[
            ("Consistência", "Mesmos valores em todos os produtos"),
            ("Manutenção", "Mudança em um lugar reflete em todos"),
            ("Escalabilidade", "Facilita crescimento do sistema"),
            ("Comunicação", "Linguagem comum entre design e dev"),
        ],
    },
];

const TYPOGRAPHY: &[DocBlock] = &[
    DocBlock::Definitions {
        title: "Como Aplicar a Hierarquia Tipográfica",
        rows: &[
            ("Título Principal (H1)", "Título da página, apenas um por página · text-3xl font-bold · bc-text-display"),
            ("Seção Principal (H2)", "Divisões principais do conteúdo · text-2xl font-semibold · bc-text-title"),
            ("Subseção (H3)", "Subdivisões de conteúdo · text-xl font-medium · bc-text-heading"),
            ("Texto Corporal (Body)", "Conteúdo principal, parágrafos · text-base · bc-text-body"),
            ("Texto Pequeno (Caption)", "Legendas, metadados, texto auxiliar · text-sm text-gray-600 · bc-text-caption"),
        ],
    },
    DocBlock::Bullets {
        title: "Espaçamento:",
        items: &[
            "Line-height mínimo: 1.5x para textos",
            "Espaço entre parágrafos: 1em",
            "Largura máxima: 60-70 caracteres",
        ],
    },
    DocBlock::Bullets {
        title: "Contraste:",
        items: &[
            "Texto normal: mínimo 4.5:1",
            "Texto grande: mínimo 3:1",
            "Sempre testar com daltonismo",
        ],
    },
    DocBlock::Code(CodeSample {
        id: "typography-html",
        trigger: "Ver Código HTML",
        code: "<article>\n  <h1 class=\"text-3xl font-bold\">\n    Título Principal\n  </h1>\n  <h2 class=\"text-2xl font-semibold\">\n    Seção\n  </h2>\n  <p class=\"text-base\">\n    Parágrafo principal...\n  </p>\n  <h3 class=\"text-xl font-medium\">\n    Subseção\n  </h3>\n  <p class=\"text-sm text-gray-600\">\n    Informação adicional...\n  </p>\n</article>",
        copy_text: None,
    }),
];

const ACCESSIBILITY: &[DocBlock] = &[
    DocBlock::Bullets {
        title: "Perceptível",
        items: &[
            "Contraste adequado",
            "Texto alternativo para imagens",
            "Conteúdo não dependente apenas de cor",
        ],
    },
    DocBlock::Bullets {
        title: "Operável",
        items: &[
            "Navegação por teclado",
            "Foco visível",
            "Tempo suficiente para interações",
        ],
    },
    DocBlock::Checklist {
        title: "Checklist de Implementação",
        items: &[
            ("Contraste de cores:", "Mínimo 4.5:1 para texto normal, 3:1 para texto grande"),
            ("Foco visível:", "Estados de foco claros em todos os elementos interativos"),
            ("Labels adequados:", "Todos os campos de formulário com labels descritivos"),
            ("Hierarquia semântica:", "Uso correto de heading tags (h1, h2, h3...)"),
            ("Área de toque:", "Mínimo 44x44px para elementos touch"),
        ],
    },
    DocBlock::Definitions {
        title: "Ferramentas de Teste",
        rows: &[
            ("axe DevTools", "Extension do Chrome para auditorias automáticas"),
            ("WAVE", "Ferramenta online para avaliar acessibilidade"),
            ("Colour Contrast Analyser", "Para verificar contraste de cores"),
            ("NVDA/VoiceOver", "Testadores de tela para navegação"),
        ],
    },
];

const DOCUMENTING: &[DocBlock] = &[
    DocBlock::Code(CodeSample {
        id: "change-template",
        trigger: "Template de Modificação",
        code: "Data: [DD/MM/YYYY]\nComponente/Token modificado: [Nome do elemento]\nTipo de mudança: [Nova funcionalidade / Correção / Melhoria]\nDescrição: [O que foi alterado e por quê]\nImpacto: [Onde a mudança afeta o sistema]\nTeste necessário: [Como validar a mudança]",
        copy_text: None,
    }),
    DocBlock::Definitions {
        title: "Exemplo Prático",
        rows: &[
            ("Data", "15/12/2024"),
            ("Componente", "Botão Primário"),
            ("Tipo", "Melhoria de acessibilidade"),
            ("Descrição", "Adicionado estado de foco mais visível com ring de 2px"),
            ("Impacto", "Todos os botões primários do sistema"),
            ("Teste", "Navegar por teclado e verificar visibilidade do foco"),
        ],
    },
    DocBlock::Definitions {
        title: "Semantic Versioning (SemVer): MAJOR.MINOR.PATCH",
        rows: &[
            ("MAJOR", "Mudanças que quebram compatibilidade"),
            ("MINOR", "Novas funcionalidades compatíveis"),
            ("PATCH", "Correções de bugs"),
        ],
    },
    DocBlock::Bullets {
        title: "Exemplo:",
        items: &[
            "v1.2.3 → v1.2.4 (correção de bug)",
            "v1.2.4 → v1.3.0 (novo componente)",
            "v1.3.0 → v2.0.0 (mudança na estrutura de tokens)",
        ],
    },
    DocBlock::Steps {
        title: "Comunicação da Mudança",
        items: &[
            "Documente a mudança usando o template",
            "Atualize o changelog do projeto",
            "Comunique à equipe via Slack/email",
            "Atualize a documentação técnica",
            "Execute testes de regressão",
        ],
    },
];

/// Manual sections in display order.
pub const DOC_SECTIONS: &[DocSection] = &[
    DocSection {
        id: DocSectionId::Intro,
        title: "Como Usar Este Design System",
        blocks: INTRO,
    },
    DocSection {
        id: DocSectionId::Colors,
        title: "Sistema de Cores - Como Aplicar",
        blocks: COLORS,
    },
    DocSection {
        id: DocSectionId::Buttons,
        title: "Sistema de Botões - Quando e Como Usar",
        blocks: BUTTONS,
    },
    DocSection {
        id: DocSectionId::Tokens,
        title: "Design Tokens - Sistema de Padronização",
        blocks: TOKENS,
    },
    DocSection {
        id: DocSectionId::Typography,
        title: "Tipografia - Hierarquia e Legibilidade",
        blocks: TYPOGRAPHY,
    },
    DocSection {
        id: DocSectionId::Accessibility,
        title: "Acessibilidade - Diretrizes Essenciais",
        blocks: ACCESSIBILITY,
    },
    DocSection {
        id: DocSectionId::Documentation,
        title: "Como Documentar Modificações",
        blocks: DOCUMENTING,
    },
];

/// Every code sample across the manual.
pub fn code_samples() -> impl Iterator<Item = &'static CodeSample> {
    DOC_SECTIONS
        .iter()
        .flat_map(|section| section.blocks.iter())
        .filter_map(|block| match block {
            DocBlock::Code(sample) => Some(sample),
            _ => None,
        })
}

/// Footer line carrying the version.
#[must_use]
pub fn version_line() -> String {
    format!("{PRODUCT_NAME} - {DOC_VERSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_colors_copy_payload_is_the_short_form() {
        let sample = code_samples()
            .find(|sample| sample.id == "primary-colors")
            .expect("sample");
        assert_eq!(
            sample.clipboard_text(),
            "--bc-color-primary: #7c3aed;\n--bc-color-primary-hover: #6d28d9;"
        );
        assert_ne!(sample.clipboard_text(), sample.code);
    }

    #[test]
    fn samples_without_override_copy_their_code() {
        let html = code_samples()
            .find(|sample| sample.id == "typography-html")
            .expect("sample");
        assert_eq!(html.clipboard_text(), html.code);
    }

    #[test]
    fn code_sample_ids_are_unique() {
        let mut ids: Vec<_> = code_samples().map(|sample| sample.id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn section_order_starts_with_intro() {
        assert_eq!(DOC_SECTIONS[0].id, DocSectionId::INITIAL);
        assert_eq!(version_line(), "Design System Bê Creative - v1.0.0");
    }
}
