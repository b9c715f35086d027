use getset::Getters;
use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// Full subsector record, including the narrative panels and the ticker
/// list the dashboard renders.
#[derive(Debug, Clone, Serialize, Getters)]
#[get = "pub"]
#[serde(rename_all = "camelCase")]
pub struct Subsector {
    id: &'static str,
    name: &'static str,
    sector_id: &'static str,
    sector_name: &'static str,
    description: &'static str,
    outlook: &'static str,
    risks: Vec<&'static str>,
    opportunities: Vec<&'static str>,
    tickers: Vec<&'static str>,
    news_query: &'static str,
}

#[derive(Debug, Clone, Serialize, Getters)]
#[get = "pub"]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    description: &'static str,
    subsectors: Vec<Subsector>,
}

/// Sector with its subsectors reduced to id and name, as listed on the
/// home page and in the sidebar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub subsectors: Vec<SubsectorRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubsectorRef {
    pub id: &'static str,
    pub name: &'static str,
}

impl Sector {
    pub fn summary(&self) -> SectorSummary {
        SectorSummary {
            id: self.id,
            name: self.name,
            icon: self.icon,
            description: self.description,
            subsectors: self
                .subsectors
                .iter()
                .map(|sub| SubsectorRef {
                    id: sub.id,
                    name: sub.name,
                })
                .collect(),
        }
    }
}

pub fn all() -> &'static [Sector] {
    &SECTORS
}

pub fn sector(id: &str) -> Option<&'static Sector> {
    SECTOR_MAP.get(id).copied()
}

pub fn subsector(id: &str) -> Option<&'static Subsector> {
    SUBSECTOR_MAP.get(id).copied()
}

lazy_static! {
    static ref SECTORS: Vec<Sector> = build_sectors();
    static ref SECTOR_MAP: HashMap<&'static str, &'static Sector> =
        SECTORS.iter().map(|sector| (sector.id, sector)).collect();
    static ref SUBSECTOR_MAP: HashMap<&'static str, &'static Subsector> = SECTORS
        .iter()
        .flat_map(|sector| sector.subsectors.iter())
        .map(|sub| (sub.id, sub))
        .collect();
}

fn build_sectors() -> Vec<Sector> {
    vec![
        Sector {
            id: "technology",
            name: "Technology",
            icon: "💻",
            description: "Software, semiconductors and the infrastructure of the digital economy.",
            subsectors: vec![
                Subsector {
                    id: "software-saas",
                    name: "Software & SaaS",
                    sector_id: "technology",
                    sector_name: "Technology",
                    description: "Subscription software vendors across productivity, infrastructure and vertical markets.",
                    outlook: "Recurring revenue models continue to prove resilient, with net retention holding up even as seat growth slows. AI-assisted features are becoming table stakes, and vendors able to monetize them without ballooning compute costs should see margin expansion through the next several quarters.",
                    risks: vec![
                        "Seat-based pricing under pressure as customers consolidate vendors",
                        "AI inference costs compressing gross margins",
                        "Elongated enterprise sales cycles in a cautious IT spending environment",
                    ],
                    opportunities: vec![
                        "Upsell of AI copilots into large installed bases",
                        "Vertical SaaS penetration in under-digitized industries",
                        "Migration of remaining on-premise workloads",
                    ],
                    tickers: vec!["MSFT", "CRM", "NOW", "ADBE", "INTU", "WDAY"],
                    news_query: "SaaS software enterprise cloud",
                },
                Subsector {
                    id: "semiconductors",
                    name: "Semiconductors",
                    sector_id: "technology",
                    sector_name: "Technology",
                    description: "Chip designers, foundries and the equipment makers that supply them.",
                    outlook: "Data-center accelerator demand remains the dominant driver, with supply of advanced packaging still the binding constraint. Analog and auto-exposed names lag the AI complex, leaving the group unusually bifurcated. Inventory digestion outside AI appears to be in its late innings.",
                    risks: vec![
                        "Export controls tightening access to the Chinese market",
                        "Cyclical overbuild if AI capex decelerates abruptly",
                        "Geopolitical concentration of leading-edge manufacturing",
                    ],
                    opportunities: vec![
                        "Multi-year data-center accelerator buildout",
                        "Advanced packaging and high-bandwidth memory capacity additions",
                        "Edge-AI silicon reaching phones and PCs",
                    ],
                    tickers: vec!["NVDA", "AMD", "AVGO", "TSM", "ASML", "AMAT"],
                    news_query: "semiconductor chips AI data center",
                },
                Subsector {
                    id: "cybersecurity",
                    name: "Cybersecurity",
                    sector_id: "technology",
                    sector_name: "Technology",
                    description: "Network, endpoint, identity and cloud security platforms.",
                    outlook: "Security budgets remain among the most protected lines in IT spending. Platform consolidation favors the large unified vendors, while demand for identity and cloud-workload protection continues to outgrow the broader market.",
                    risks: vec![
                        "Platform bundling compressing prices for point solutions",
                        "High valuations sensitive to any billings deceleration",
                        "Talent costs in a persistently tight security labor market",
                    ],
                    opportunities: vec![
                        "Consolidation of point products onto unified platforms",
                        "Regulatory-driven spend on incident reporting and compliance",
                        "Securing AI applications and their data pipelines",
                    ],
                    tickers: vec!["PANW", "CRWD", "ZS", "FTNT", "OKTA"],
                    news_query: "cybersecurity breach ransomware security software",
                },
            ],
        },
        Sector {
            id: "healthcare",
            name: "Healthcare",
            icon: "🩺",
            description: "Drug developers, device makers and care providers.",
            subsectors: vec![
                Subsector {
                    id: "biotech",
                    name: "Biotechnology",
                    sector_id: "healthcare",
                    sector_name: "Healthcare",
                    description: "Clinical-stage and commercial biotechnology companies.",
                    outlook: "A steadier rate backdrop has reopened the funding window for mid-cap developers, and big-pharma patent cliffs late this decade keep acquirers active. Obesity and neurology remain the most crowded and best-funded therapeutic areas.",
                    risks: vec![
                        "Binary clinical trial outcomes",
                        "Drug pricing reform pressuring future revenue assumptions",
                        "Financing risk for pre-revenue names if rates back up",
                    ],
                    opportunities: vec![
                        "Acquisitions by large pharma ahead of patent cliffs",
                        "Next-generation obesity and metabolic franchises",
                        "Platform approaches in RNA and gene editing",
                    ],
                    tickers: vec!["AMGN", "VRTX", "REGN", "GILD", "BIIB"],
                    news_query: "biotech FDA approval clinical trial",
                },
                Subsector {
                    id: "medical-devices",
                    name: "Medical Devices",
                    sector_id: "healthcare",
                    sector_name: "Healthcare",
                    description: "Surgical, diagnostic and monitoring equipment manufacturers.",
                    outlook: "Procedure volumes have normalized above pre-pandemic trend, supporting steady mid-single-digit growth. Pipelines in robotics, continuous monitoring and structural heart carry the premium multiples, and the group is less exposed to reimbursement noise than pharma.",
                    risks: vec![
                        "GLP-1 adoption dampening long-run demand for some device categories",
                        "Hospital capital budgets tightening",
                        "Pricing pressure from group purchasing organizations",
                    ],
                    opportunities: vec![
                        "Surgical robotics expanding into general surgery",
                        "Continuous glucose monitoring beyond diabetes",
                        "Emerging-market procedure growth",
                    ],
                    tickers: vec!["ISRG", "SYK", "MDT", "BSX", "DXCM"],
                    news_query: "medical devices surgical robotics FDA",
                },
            ],
        },
        Sector {
            id: "financials",
            name: "Financials",
            icon: "🏦",
            description: "Banks, payment networks and financial technology.",
            subsectors: vec![
                Subsector {
                    id: "banks",
                    name: "Banks",
                    sector_id: "financials",
                    sector_name: "Financials",
                    description: "Money-center and regional banking institutions.",
                    outlook: "Net interest margins have stabilized as deposit costs peak, and capital-markets activity is recovering off a deep trough. Credit remains benign outside commercial real estate, where reserves continue to build gradually rather than abruptly.",
                    risks: vec![
                        "Commercial real estate losses concentrated in regional lenders",
                        "Deposit competition from money-market funds",
                        "Elevated capital requirements under final Basel rules",
                    ],
                    opportunities: vec![
                        "Investment-banking fee recovery from cyclical lows",
                        "Consolidation among sub-scale regional banks",
                        "Technology-driven efficiency gains in consumer banking",
                    ],
                    tickers: vec!["JPM", "BAC", "WFC", "GS", "MS"],
                    news_query: "bank earnings net interest margin lending",
                },
                Subsector {
                    id: "fintech",
                    name: "Fintech & Payments",
                    sector_id: "financials",
                    sector_name: "Financials",
                    description: "Payment networks, processors and digital-first financial services.",
                    outlook: "Consumer spending volumes keep grinding higher, favoring the networks' toll-booth models. Profitability discipline has replaced growth-at-any-cost among the digital challengers, and the survivors are emerging with credible operating leverage.",
                    risks: vec![
                        "Interchange regulation in the US and Europe",
                        "Credit normalization at lenders embedded in payment apps",
                        "Real-time payment rails disintermediating card networks",
                    ],
                    opportunities: vec![
                        "Cash-to-card conversion in emerging markets",
                        "Value-added services layered on payment volume",
                        "Embedded finance distribution through software platforms",
                    ],
                    tickers: vec!["V", "MA", "PYPL", "SQ", "FI"],
                    news_query: "payments fintech digital wallet",
                },
            ],
        },
        Sector {
            id: "energy",
            name: "Energy",
            icon: "⚡",
            description: "Oil and gas producers alongside the renewable transition.",
            subsectors: vec![
                Subsector {
                    id: "oil-gas",
                    name: "Oil & Gas",
                    sector_id: "energy",
                    sector_name: "Energy",
                    description: "Integrated majors, independents and oilfield services.",
                    outlook: "Capital discipline still rules: production growth is modest, free cash flow is being returned rather than reinvested, and consolidation of shale acreage continues. Crude remains range-bound with OPEC+ spare capacity capping upside and resilient demand supporting the floor.",
                    risks: vec![
                        "Demand erosion from vehicle electrification",
                        "OPEC+ supply decisions driving price volatility",
                        "Rising costs of capital tied to energy-transition policy",
                    ],
                    opportunities: vec![
                        "Shale consolidation driving scale efficiencies",
                        "LNG export capacity expansion",
                        "Carbon capture projects monetizing existing infrastructure",
                    ],
                    tickers: vec!["XOM", "CVX", "COP", "SLB", "EOG"],
                    news_query: "oil gas crude OPEC production",
                },
                Subsector {
                    id: "renewables",
                    name: "Renewables",
                    sector_id: "energy",
                    sector_name: "Energy",
                    description: "Solar, wind and grid-scale storage developers and suppliers.",
                    outlook: "Falling equipment costs and data-center power demand underpin record installation volumes, but higher financing costs and interconnection queues keep project returns thin. Policy support remains the swing factor for the pace of deployment.",
                    risks: vec![
                        "Interest-rate sensitivity of project economics",
                        "Policy and subsidy uncertainty across jurisdictions",
                        "Grid interconnection delays pushing out revenue",
                    ],
                    opportunities: vec![
                        "Surging electricity demand from data centers",
                        "Grid-scale storage attach rates rising with solar",
                        "Domestic manufacturing incentives reshoring supply chains",
                    ],
                    tickers: vec!["NEE", "FSLR", "ENPH", "BEP", "RUN"],
                    news_query: "renewable energy solar wind storage",
                },
            ],
        },
    ]
}
