//! Published catalog texts.
//!
//! Two areas: discrimination/prejudice and rights/equality. Texts are in
//! Portuguese and rendered verbatim.

use super::types::{Area, AreaIntro, Content, Topic};

pub static INTROS: &[AreaIntro] = &[
    AreaIntro {
        area_id: "discriminacao",
        title: "Sobre discriminação e preconceitos",
        text: "A discriminação assenta em estereótipos e resulta em tratamento desigual de pessoas ou grupos. Pode ser direta (atos e políticas explícitas) ou indireta/estrutural, quando regras aparentemente neutras criam barreiras. Combater a discriminação exige consciência crítica, educação, participação e práticas que removam obstáculos à igualdade real.",
    },
    AreaIntro {
        area_id: "direitos",
        title: "Sobre direitos e igualdade",
        text: "Direitos e igualdade significam garantir, na prática, oportunidades e dignidade para todas as pessoas. Para lá das leis, é essencial promover acessibilidade, representatividade e processos transparentes. Organizações públicas e privadas têm um papel decisivo na criação de ambientes seguros e inclusivos.",
    },
];

pub static AREAS: &[Area] = &[
    Area {
        id: "discriminacao",
        slug: "discriminacao-preconceitos",
        title: "Discriminação / Preconceitos",
        description: "Informação clara sobre diferentes formas de preconceito e discriminação.",
        topics: DISCRIMINACAO,
    },
    Area {
        id: "direitos",
        slug: "direitos-e-igualdade",
        title: "Direitos e Igualdade",
        description: "Direitos fundamentais, acesso a oportunidades e igualdade na prática.",
        topics: DIREITOS,
    },
];

// ============================================================================
// Discriminação / Preconceitos
// ============================================================================

const DISCRIMINACAO: &[Topic] = &[
    Topic {
        slug: "idadismo",
        title: "Idadismo",
        image: "https://images.unsplash.com/photo-1520975916090-3105956dac38?q=80&w=1400&auto=format&fit=crop",
        summary: "Preconceito baseado na idade, que afeta pessoas mais velhas e mais jovens e limita oportunidades.",
        content: Some(Content {
            definicao: Some("O idadismo é o preconceito baseado na idade, que pode afetar tanto pessoas mais velhas quanto mais jovens. Esse tipo de discriminação se manifesta em diferentes contextos, como no mercado de trabalho, na mídia e na saúde, restringindo oportunidades e reforçando estereótipos negativos."),
            consequencias: Some("O idadismo pode gerar isolamento social, dificuldades financeiras e impacto na autoestima das pessoas afetadas. Para os mais velhos, pode resultar em dificuldade para acessar empregos, serviços de saúde e participação ativa na sociedade. Para os mais jovens, pode significar a invalidação de suas opiniões e desafios na construção de suas carreiras."),
            exemplos: Some(&[
                "Empresas que evitam contratar funcionários acima de uma certa idade, alegando menor capacidade de aprendizado.",
                "Jovens que não são levados a sério em espaços profissionais e políticos por serem considerados 'inexperientes'.",
                "Representações na mídia que reforçam a ideia de que envelhecer é algo negativo ou vergonhoso.",
            ]),
            atitudes: Some(&[
                "Desafiar estereótipos ao valorizar a experiência de pessoas mais velhas e a inovação dos mais jovens.",
                "Incentivar a contratação de profissionais de diferentes faixas etárias.",
                "Criar espaços de diálogo intergeracional para troca de conhecimento.",
            ]),
            mudar: Some("É necessário um esforço coletivo para quebrar os estereótipos relacionados à idade. Isto inclui mudanças nas políticas públicas, práticas empresariais e consciencialização social. O envelhecimento deve ser visto como um processo natural e positivo, e os jovens devem ser respeitados como agentes de mudança."),
            empresas: Some(&[
                "Implementar programas de diversidade etária no recrutamento.",
                "Oferecer formação para reduzir o preconceito intergeracional no trabalho.",
                "Criar políticas de aprendizagem contínua para todas as idades.",
            ]),
            livros: Some(&[
                "A Revolução da Longevidade – Ken Dychtwald",
                "Ageism Unmasked – Tracey Gendron",
            ]),
            artigos: Some(&[
                "O impacto do idadismo no mercado de trabalho – Revista Sociológica",
                "Como a mídia reforça estereótipos etários? – Jornal de Estudos Sociais",
            ]),
        }),
    },
    Topic {
        slug: "racismo",
        title: "Racismo",
        image: "https://images.unsplash.com/photo-1516924962500-2b4b3b83a6b6?q=80&w=1400&auto=format&fit=crop",
        summary: "Discriminação baseada na cor da pele ou origem étnica, presente de forma individual e estrutural.",
        content: Some(Content {
            definicao: Some("O racismo é a discriminação baseada na cor da pele ou na origem étnica de uma pessoa. Ele pode ser explícito, como insultos e ataques físicos, ou estrutural, quando uma sociedade cria barreiras que dificultam o acesso de determinados grupos a oportunidades."),
            consequencias: Some("Afeta oportunidades de emprego, acesso à educação, saúde e bem-estar emocional. Perpetua desigualdades económicas e sociais e dificulta a mobilidade social e o reconhecimento de identidades culturais."),
            exemplos: Some(&[
                "Perfilamento racial em abordagens policiais.",
                "Menor representatividade de pessoas negras e indígenas em cargos de liderança.",
                "Estereótipos negativos sobre grupos étnicos na mídia.",
            ]),
            atitudes: Some(&[
                "Não tolerar piadas e comentários racistas.",
                "Consumir e promover conteúdos de autores e criadores negros e indígenas.",
                "Questionar desigualdades raciais em espaços de poder.",
            ]),
            mudar: Some("Combater o racismo exige educação, políticas públicas e ações afirmativas para garantir acesso equitativo a oportunidades. O reconhecimento de desigualdades históricas é essencial para uma sociedade mais justa."),
            empresas: Some(&[
                "Criar programas de inclusão e equidade racial.",
                "Oferecer formação sobre diversidade e preconceito inconsciente.",
                "Contratar e promover profissionais de grupos sub-representados.",
            ]),
            livros: Some(&[
                "Pequeno Manual Antirracista – Djamila Ribeiro",
                "Entre o Mundo e Eu – Ta-Nehisi Coates",
            ]),
            artigos: Some(&[
                "O impacto do racismo estrutural na economia – Instituto de Estudos Sociais",
                "Como o racismo afeta a saúde mental? – Jornal de Psicologia Social",
            ]),
        }),
    },
    Topic {
        slug: "sexismo",
        title: "Sexismo",
        image: "https://images.unsplash.com/photo-1517244683847-7456b63c5969?q=80&w=1400&auto=format&fit=crop",
        summary: "Tratamento desigual com base no sexo ou género, limitando escolhas e participação social.",
        content: Some(Content {
            definicao: Some("Sexismo é a discriminação baseada no sexo ou género, expressa em estereótipos, exclusão e violência."),
            consequencias: Some("Afeta rendimentos, segurança, participação política e bem-estar. Gera teto de vidro e desigualdade salarial."),
            exemplos: Some(&[
                "Interrupções constantes a mulheres em reuniões (manterrupting).",
                "Expectativa de que tarefas de cuidado recaíam só sobre mulheres.",
                "Piadas que sexualizam ou diminuem pessoas por género.",
            ]),
            atitudes: Some(&[
                "Partilhar responsabilidades de cuidado e tarefas domésticas.",
                "Adotar linguagem inclusiva.",
                "Implementar políticas de igualdade salarial.",
            ]),
            mudar: Some("Educação para igualdade de género, políticas públicas e responsabilização por assédio e violência."),
            empresas: Some(&[
                "Auditorias salariais e transparência.",
                "Canais seguros de denúncia de assédio.",
                "Mentoria e programas de liderança para mulheres e pessoas trans.",
            ]),
            ..Content::EMPTY
        }),
    },
    Topic {
        slug: "lgbtqfobia",
        title: "LGBTQ+fobia",
        image: "https://images.unsplash.com/photo-1523588048872-2d0fabf9a3a5?q=80&w=1400&auto=format&fit=crop",
        summary: "Preconceito e violência contra pessoas LGBTQ+, afetando direitos, segurança e saúde.",
        content: Some(Content {
            definicao: Some("Conjunto de atitudes e práticas discriminatórias contra pessoas lésbicas, gays, bissexuais, trans e queer."),
            consequencias: Some("Eleva riscos de violência, depressão e exclusão familiar e escolar; limita acesso a emprego e saúde."),
            exemplos: Some(&[
                "Assédio a casais do mesmo sexo em espaços públicos.",
                "Rejeição a pessoas trans em processos de recrutamento.",
                "Bullying homofóbico/transfóbico em escolas.",
            ]),
            atitudes: Some(&[
                "Usar nomes e pronomes corretos.",
                "Apoiar políticas de igualdade e proteção.",
                "Criar espaços seguros em escolas e locais de trabalho.",
            ]),
            mudar: Some("Garantir direitos, proteção legal e educação sexual inclusiva para reduzir estigma e violência."),
            empresas: Some(&[
                "Benefícios que incluam parceiros do mesmo sexo.",
                "Planos de saúde que incluam cuidados trans-afirmativos.",
                "Grupos de afinidade e formação contínua.",
            ]),
            ..Content::EMPTY
        }),
    },
    Topic {
        slug: "pcd",
        title: "Discriminação contra pessoas com deficiência",
        image: "https://images.unsplash.com/photo-1544776193-352d25ca82cd?q=80&w=1400&auto=format&fit=crop",
        summary: "Barreiras físicas, comunicacionais e atitudes que excluem pessoas com deficiência.",
        content: Some(Content {
            definicao: Some("O capacitismo subestima capacidades e nega acessos. A deficiência resulta da interação entre limitações e barreiras do meio."),
            consequencias: Some("Exclusão escolar e laboral, dependência forçada e perda de autonomia."),
            exemplos: Some(&[
                "Edifícios sem rampas ou elevadores.",
                "Conteúdos digitais sem alternativas acessíveis.",
                "Processos seletivos que excluem por estereótipo.",
            ]),
            atitudes: Some(&[
                "Perguntar antes de ajudar e respeitar autonomia.",
                "Garantir acessibilidade digital e arquitetónica.",
                "Usar linguagem centrada na pessoa.",
            ]),
            mudar: Some("Aplicar o desenho universal, remover barreiras e cumprir legislação de acessibilidade."),
            empresas: Some(&[
                "Adaptações razoáveis e tecnologias assistivas.",
                "Recrutamento inclusivo e metas de contratação.",
                "Teste de acessibilidade em produtos.",
            ]),
            ..Content::EMPTY
        }),
    },
    Topic {
        slug: "gordofobia",
        title: "Gordofobia e preconceito contra corpos não normativos",
        image: "https://images.unsplash.com/photo-1513546493312-0066d7de3fd2?q=80&w=1400&auto=format&fit=crop",
        summary: "Estigma e tratamento desigual baseados no tamanho e forma do corpo.",
        content: Some(Content {
            definicao: Some("Conjunto de estereótipos e políticas que penalizam corpos fora de padrões estreitos de beleza."),
            consequencias: Some("Impacto na saúde mental, acesso a cuidados e oportunidades profissionais."),
            exemplos: Some(&[
                "Assentos e equipamentos sem tamanhos diversos.",
                "Piadas e comentários ofensivos.",
                "Discriminação em contratações e promoções.",
            ]),
            atitudes: Some(&[
                "Respeitar corpos em todas as formas e tamanhos.",
                "Evitar comentários sobre corpos alheios.",
                "Modelos inclusivos em comunicação.",
            ]),
            mudar: Some("Promover saúde sem estigma e incluir medidas de acessibilidade e conforto."),
            empresas: Some(&[
                "Políticas anti-assédio claras.",
                "Uniformes e EPI em tamanhos variados.",
                "Comunicação sem estereótipos.",
            ]),
            ..Content::EMPTY
        }),
    },
    Topic {
        slug: "classismo",
        title: "Classismo e desigualdade socioeconómica",
        image: "https://images.unsplash.com/photo-1509098681029-b45e9c845022?q=80&w=1400&auto=format&fit=crop",
        summary: "Preconceito e barreiras baseadas em classe social e rendimento.",
        content: Some(Content {
            definicao: Some("Classismo é a desvalorização e exclusão de pessoas por origem socioeconómica."),
            consequencias: Some("Ciclo de pobreza, segregação territorial e acesso desigual a serviços."),
            exemplos: Some(&[
                "Estigma a quem vive em bairros periféricos.",
                "Recrutamento por 'fit' social.",
                "Expulsão por gentrificação sem alternativas.",
            ]),
            atitudes: Some(&[
                "Combater preconceitos sobre sotaques, roupas e endereços.",
                "Apoiar políticas redistributivas.",
                "Transparência em critérios de seleção.",
            ]),
            mudar: Some("Reduzir desigualdade via educação, saúde e rendimentos mínimos adequados."),
            empresas: Some(&[
                "Estágios pagos e bolsas.",
                "Recrutamento cego a dados socioeconómicos.",
                "Mapeamento de barreiras internas.",
            ]),
            ..Content::EMPTY
        }),
    },
    Topic {
        slug: "religiao",
        title: "Discriminação religiosa e intolerância",
        image: "https://images.unsplash.com/photo-1470909752002-c74e9fe2e8fd?q=80&w=1400&auto=format&fit=crop",
        summary: "Hostilidade ou exclusão em função de crenças religiosas ou ausência delas.",
        content: Some(Content {
            definicao: Some("Inclui ataques, estereótipos e restrições a práticas religiosas ou convicções não religiosas."),
            consequencias: Some("Violência, marginalização e autocensura."),
            exemplos: Some(&[
                "Proibir símbolos religiosos sem critério proporcional.",
                "Vandalismo a locais de culto.",
                "Estigma a pessoas sem religião.",
            ]),
            atitudes: Some(&[
                "Respeitar liberdade de crença e de não crer.",
                "Acomodar práticas quando razoável.",
                "Promover diálogo inter-religioso.",
            ]),
            mudar: Some("Educação para diversidade de crenças e proteção legal contra crimes de ódio."),
            empresas: Some(&[
                "Salas de recolhimento e flexibilidade de horários.",
                "Políticas contra assédio religioso.",
                "Calendários inclusivos.",
            ]),
            ..Content::EMPTY
        }),
    },
    Topic {
        slug: "profissoes-estigmatizadas",
        title: "Preconceito contra profissionais (trabalho informal, trabalho sexual, entre outros)",
        image: "https://images.unsplash.com/photo-1488521787991-ed7bbaae773c?q=80&w=1400&auto=format&fit=crop",
        summary: "Estigmas que desvalorizam certas ocupações e expõem trabalhadores a riscos e exclusão.",
        content: Some(Content {
            definicao: Some("Preconceito dirigido a quem trabalha em setores informais, sexuais ou precarizados."),
            consequencias: Some("Falta de proteção social, exposição a violência e dificuldade de acesso a crédito, habitação e serviços."),
            exemplos: Some(&[
                "Recusa de atendimento a trabalhadores do sexo em serviços de saúde.",
                "Desvalorização de vendedores ambulantes e trabalhadores de limpeza.",
                "Ausência de contratos e direitos laborais em trabalho por plataformas.",
            ]),
            atitudes: Some(&[
                "Tratar todas as ocupações com respeito.",
                "Ouvir as organizações representativas destes trabalhadores.",
                "Evitar linguagem estigmatizante.",
            ]),
            mudar: Some("Reconhecer direitos laborais, alargar a proteção social e combater a criminalização da pobreza."),
            empresas: Some(&[
                "Garantir condições dignas a trabalhadores subcontratados.",
                "Cláusulas de respeito e segurança na cadeia de fornecimento.",
                "Programas de formalização e qualificação.",
            ]),
            ..Content::EMPTY
        }),
    },
];

// ============================================================================
// Direitos e Igualdade
// ============================================================================

const DIREITOS: &[Topic] = &[
    Topic {
        slug: "direitos-humanos",
        title: "Direitos humanos",
        image: "https://images.unsplash.com/photo-1488521787991-ed7bbaae773c?q=80&w=1400&auto=format&fit=crop",
        summary: "Direitos universais, indivisíveis e inalienáveis que protegem a dignidade de cada pessoa.",
        content: Some(Content {
            definicao: Some("Os direitos humanos são direitos inerentes a todas as pessoas, independentemente de nacionalidade, sexo, origem, religião ou qualquer outra condição. Incluem direitos civis, políticos, económicos, sociais e culturais."),
            consequencias: Some("Quando não são respeitados, surgem exclusão, violência e perda de confiança nas instituições."),
            exemplos: Some(&[
                "Liberdade de expressão e de associação.",
                "Direito a um julgamento justo.",
                "Direito à habitação, à saúde e à educação.",
            ]),
            atitudes: Some(&[
                "Conhecer e divulgar a Declaração Universal dos Direitos Humanos.",
                "Denunciar violações às entidades competentes.",
                "Apoiar organizações de defesa de direitos.",
            ]),
            mudar: Some("A proteção dos direitos humanos depende de instituições independentes, participação cidadã e escrutínio público."),
            livros: Some(&[
                "A Era dos Direitos – Norberto Bobbio",
            ]),
            ..Content::EMPTY
        }),
    },
    Topic {
        slug: "igualdade-de-genero",
        title: "Igualdade de género",
        image: "https://images.unsplash.com/photo-1517244683847-7456b63c5969?q=80&w=1400&auto=format&fit=crop",
        summary: "Mesmos direitos, responsabilidades e oportunidades para pessoas de todos os géneros.",
        content: Some(Content {
            definicao: Some("A igualdade de género significa que o género não determina o acesso a direitos, recursos, poder ou oportunidades."),
            consequencias: Some("A desigualdade reflete-se em diferenças salariais, sub-representação em cargos de decisão e sobrecarga com trabalho de cuidado."),
            exemplos: Some(&[
                "Licenças parentais partilhadas.",
                "Paridade em listas eleitorais e conselhos de administração.",
            ]),
            atitudes: Some(&[
                "Dividir de forma justa o trabalho doméstico.",
                "Contestar estereótipos de género na educação das crianças.",
            ]),
            empresas: Some(&[
                "Publicar relatórios de diferença salarial.",
                "Horários flexíveis para todas as pessoas com responsabilidades familiares.",
            ]),
            ..Content::EMPTY
        }),
    },
    Topic {
        slug: "acessibilidade",
        title: "Acessibilidade",
        image: "https://images.unsplash.com/photo-1544776193-352d25ca82cd?q=80&w=1400&auto=format&fit=crop",
        summary: "Espaços, serviços e conteúdos utilizáveis por todas as pessoas, com autonomia.",
        content: Some(Content {
            definicao: Some("Acessibilidade é a condição que permite a qualquer pessoa usar espaços, transportes, informação e serviços em segurança e com autonomia."),
            exemplos: Some(&[
                "Legendas e interpretação em língua gestual.",
                "Sites compatíveis com leitores de ecrã.",
                "Transportes públicos com piso rebaixado.",
            ]),
            mudar: Some("Integrar a acessibilidade desde o início de cada projeto, em vez de a acrescentar no fim."),
            empresas: Some(&[
                "Auditorias de acessibilidade física e digital.",
                "Envolver pessoas com deficiência no desenho de produtos.",
            ]),
            ..Content::EMPTY
        }),
    },
    Topic {
        slug: "educacao",
        title: "Direito à educação",
        image: "https://images.unsplash.com/photo-1509098681029-b45e9c845022?q=80&w=1400&auto=format&fit=crop",
        summary: "Educação inclusiva e de qualidade como base para a igualdade de oportunidades.",
        content: Some(Content {
            definicao: Some("O direito à educação garante o acesso a ensino gratuito, inclusivo e de qualidade ao longo da vida, sem discriminação, como condição para o exercício de todos os outros direitos."),
            ..Content::EMPTY
        }),
    },
    Topic {
        slug: "saude",
        title: "Acesso à saúde",
        image: "https://images.unsplash.com/photo-1513546493312-0066d7de3fd2?q=80&w=1400&auto=format&fit=crop",
        summary: "Cuidados de saúde disponíveis, acessíveis e respeitadores para todas as pessoas.",
        content: Some(Content {
            definicao: Some("O acesso à saúde implica serviços disponíveis, financeiramente acessíveis e culturalmente adequados, sem barreiras de origem, rendimento ou identidade."),
            consequencias: Some("Barreiras no acesso agravam doenças evitáveis e aprofundam desigualdades entre regiões e grupos sociais."),
            atitudes: Some(&[
                "Respeitar a confidencialidade e a autonomia de cada pessoa.",
                "Combater a desinformação em saúde.",
            ]),
            ..Content::EMPTY
        }),
    },
    Topic {
        slug: "participacao-civica",
        title: "Participação cívica",
        image: "https://images.unsplash.com/photo-1470909752002-c74e9fe2e8fd?q=80&w=1400&auto=format&fit=crop",
        summary: "Envolvimento das pessoas nas decisões que afetam a sua comunidade.",
        content: Some(Content {
            definicao: Some("A participação cívica inclui votar, associar-se, intervir em consultas públicas e acompanhar a ação das instituições."),
            exemplos: Some(&[
                "Orçamentos participativos municipais.",
                "Associações de moradores e de estudantes.",
                "Petições e iniciativas legislativas de cidadãos.",
            ]),
            atitudes: Some(&[
                "Informar-se a partir de fontes diversas e fiáveis.",
                "Participar em reuniões públicas da sua freguesia ou município.",
            ]),
            mudar: Some("Processos transparentes e linguagem clara aproximam as instituições das pessoas e reforçam a confiança democrática."),
            artigos: Some(&[
                "Democracia participativa em Portugal – Observatório da Democracia",
            ]),
            ..Content::EMPTY
        }),
    },
];
