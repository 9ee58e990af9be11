//! Layer naming rules and token conventions.

use serde::Serialize;

use crate::{GuideNote, Named};

/// Naming rule for one family of design layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NamingRule {
    /// Layer family.
    pub category: &'static str,
    /// Naming pattern with placeholders.
    pub pattern: &'static str,
    /// Concrete names following the pattern.
    pub examples: &'static [&'static str],
    /// Why the pattern is shaped this way.
    pub description: &'static str,
}

impl Named for NamingRule {
    fn name(&self) -> &'static str {
        self.category
    }
}

/// A single semantic token example.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TokenExample {
    /// Token name.
    pub name: &'static str,
    /// Where it applies.
    pub usage: &'static str,
    /// Primitive it resolves to, `light / dark` when themed.
    pub value: &'static str,
}

impl Named for TokenExample {
    fn name(&self) -> &'static str {
        self.name
    }
}

/// Token family sharing a prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TokenConvention {
    /// Family name.
    pub category: &'static str,
    /// Shared prefix.
    pub prefix: &'static str,
    /// Tokens in the family.
    pub examples: &'static [TokenExample],
}

impl Named for TokenConvention {
    fn name(&self) -> &'static str {
        self.category
    }
}

const fn example(name: &'static str, usage: &'static str, value: &'static str) -> TokenExample {
    TokenExample { name, usage, value }
}

/// Layer naming rules, one accordion item each.
pub const LAYER_NAMING_RULES: &[NamingRule] = &[
    NamingRule {
        category: "Botões",
        pattern: "Button/[Variant]/[State]",
        examples: &[
            "Button/Primary/Default",
            "Button/Primary/Hover",
            "Button/Secondary/Disabled",
            "Button/Ghost/Focus",
        ],
        description: "Organização hierárquica por tipo, variante e estado para facilitar a identificação e manutenção.",
    },
    NamingRule {
        category: "Cards",
        pattern: "Card-[Purpose]-[Number]",
        examples: &[
            "Card-Product-01",
            "Card-Feature-02",
            "Card-Testimonial-03",
            "Card-Pricing-01",
        ],
        description: "Nomenclatura específica por propósito com numeração sequencial para variações.",
    },
    NamingRule {
        category: "Inputs",
        pattern: "Input/[Type]/[State]",
        examples: &[
            "Input/Text/Default",
            "Input/Email/Error",
            "Input/Search/Focus",
            "Input/Password/Filled",
        ],
        description: "Categorização por tipo de input e estado atual para organização clara.",
    },
    NamingRule {
        category: "Ícones",
        pattern: "Icon/[Category]/[Name]",
        examples: &[
            "Icon/Navigation/Arrow-Right",
            "Icon/Action/Delete",
            "Icon/Status/Success",
            "Icon/Social/Facebook",
        ],
        description: "Agrupamento por categoria funcional seguido do nome específico do ícone.",
    },
];

/// Semantic token families.
pub const TOKEN_CONVENTIONS: &[TokenConvention] = &[
    TokenConvention {
        category: "Superfícies",
        prefix: "bc-surface",
        examples: &[
            example("bc-surface-background", "Background principal da aplicação", "Neutral 50 / White"),
            example("bc-surface-card", "Background de cards e containers", "White / Neutral 800"),
            example("bc-surface-primary", "Botões primários e elementos principais", "Brand 500"),
            example("bc-surface-elevated", "Elementos com elevação (modais, dropdowns)", "White + Shadow / Neutral 900"),
        ],
    },
    TokenConvention {
        category: "Texto",
        prefix: "bc-text",
        examples: &[
            example("bc-text-primary", "Texto principal e headlines", "Neutral 900 / White"),
            example("bc-text-secondary", "Texto secundário e descrições", "Neutral 600 / Neutral 300"),
            example("bc-text-inverse", "Texto sobre backgrounds escuros", "White / Neutral 900"),
            example("bc-text-brand", "Texto destacado com cor da marca", "Brand 600"),
        ],
    },
    TokenConvention {
        category: "Espaçamento",
        prefix: "bc-space",
        examples: &[
            example("bc-space-xs", "Espaçamento mínimo entre elementos", "4px"),
            example("bc-space-sm", "Espaçamento pequeno para elementos relacionados", "8px"),
            example("bc-space-md", "Espaçamento padrão entre componentes", "16px"),
            example("bc-space-lg", "Espaçamento entre seções", "24px"),
            example("bc-space-xl", "Espaçamento entre blocos principais", "32px"),
        ],
    },
    TokenConvention {
        category: "Interação",
        prefix: "bc-interaction",
        examples: &[
            example("bc-interaction-hover", "Estado de hover em elementos interativos", "Brand 600 / Neutral 700"),
            example("bc-interaction-active", "Estado ativo/pressionado", "Brand 700 / Neutral 800"),
            example("bc-interaction-focus", "Estado de foco para acessibilidade", "Brand 500 + Ring"),
            example("bc-interaction-disabled", "Estado desabilitado", "Neutral 300 / Neutral 600"),
        ],
    },
];

/// Why the conventions matter.
pub const NAMING_PRACTICES: &[GuideNote] = &[
    GuideNote {
        title: "Consistência e Escalabilidade",
        body: "Adote convenções desde o início do projeto. Uma nomenclatura consistente facilita a colaboração entre designers e desenvolvedores, reduz erros e acelera o processo de desenvolvimento. Quando toda a equipe segue as mesmas regras, novos membros conseguem entender e contribuir mais rapidamente.",
    },
    GuideNote {
        title: "Hierarquia Clara",
        body: "Use estruturas hierárquicas que reflitam a organização lógica dos componentes. Por exemplo, 'Button/Primary/Hover' deixa claro que se trata de um botão, na variante primária, no estado hover. Isso facilita a busca e organização no Figma.",
    },
    GuideNote {
        title: "Prefixos Identificadores",
        body: "O prefixo 'bc' (Be Creative) identifica imediatamente que o token pertence ao seu design system. Isso evita conflitos com outras bibliotecas e deixa clara a origem do componente durante o desenvolvimento.",
    },
    GuideNote {
        title: "Versionamento e Documentação",
        body: "Mantenha documentação atualizada sobre as convenções adotadas. Quando mudanças forem necessárias, versione adequadamente para não quebrar projetos existentes. Use descrições claras nos tokens do Figma para explicar quando e onde usar cada elemento.",
    },
    GuideNote {
        title: "Tokens Semânticos vs Literais",
        body: "Prefira tokens semânticos ('surface-primary') a literais ('purple-500'). Tokens semânticos permitem mudanças de tema mais fáceis e comunicam a intenção de uso, não apenas a aparência visual.",
    },
    GuideNote {
        title: "Estrutura de Arquivos",
        body: "Organize layers e componentes em grupos lógicos. Use páginas separadas no Figma para diferentes categorias (Foundations, Components, Patterns). Mantenha uma página master com todos os tokens para referência rápida.",
    },
];

/// Step-by-step design tool setup.
pub const FIGMA_SETUP_GUIDE: &[GuideNote] = &[
    GuideNote {
        title: "1. Configuração de Variables",
        body: "Crie Collections organizadas por categoria: Colors, Typography, Spacing, Effects. Configure modes para Light/Dark themes. Use primitive tokens (gray-100) como base e semantic tokens (surface-primary) para aplicação.",
    },
    GuideNote {
        title: "2. Organização de Layers",
        body: "Estruture suas páginas: 📚 Foundations (cores, tipografia, espaçamento), 🧩 Components (botões, inputs, cards), 📋 Templates (layouts complexos), 📖 Documentation (guias de uso).",
    },
    GuideNote {
        title: "3. Nomenclatura de Componentes",
        body: "Use master components com variantes bem definidas. Exemplo: Button component com variants (Primary, Secondary, Ghost) e boolean properties (Disabled, Loading). Sempre inclua descrições explicativas.",
    },
    GuideNote {
        title: "4. Auto Layout e Constraints",
        body: "Configure Auto Layout em todos os componentes para facilitar responsividade. Use constraints adequados (Left & Right para inputs, Center para botões). Teste redimensionamento antes de publicar.",
    },
];

/// Short-term benefits of adopting the conventions.
pub const IMMEDIATE_BENEFITS: &[&str] = &[
    "Redução de 60% no tempo de busca por componentes",
    "Menor chance de inconsistências visuais",
    "Facilita onboarding de novos designers",
    "Melhora comunicação entre design e desenvolvimento",
];

/// Long-term benefits of adopting the conventions.
pub const LONG_TERM_BENEFITS: &[&str] = &[
    "Escalabilidade do design system",
    "Manutenção mais eficiente",
    "Facilita mudanças de tema/rebrand",
    "Base sólida para automações",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_examples_share_their_family_prefix() {
        for convention in TOKEN_CONVENTIONS {
            for token in convention.examples {
                assert!(
                    token.name.starts_with(convention.prefix),
                    "{} outside {}",
                    token.name,
                    convention.prefix
                );
            }
        }
    }

    #[test]
    fn layer_examples_share_the_pattern_root() {
        for rule in LAYER_NAMING_RULES {
            let root = rule
                .pattern
                .split(['/', '-'])
                .next()
                .expect("pattern root");
            assert!(rule.examples.iter().all(|example| example.starts_with(root)));
        }
    }
}
