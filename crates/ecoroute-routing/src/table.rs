//! Static role × industry tables.
//!
//! Cells are plain `match` arms so the tables live in read-only memory and
//! can never be mutated after startup. A cell returns `None` when the role
//! defines no entry for that industry; callers then retry with
//! [`Industry::Other`].

use ecoroute_common::types::{Industry, Role};

/// Returns the dashboard route for a role/industry pair.
///
/// The route table is total: every pair in the cross-product has a cell.
#[must_use]
pub const fn route_cell(role: Role, industry: Industry) -> Option<&'static str> {
    let route = match (role, industry) {
        (Role::SupplyChainManager, _) => "/workspace/supply-chain-map",
        (Role::EsgOfficer, _) => "/workspace/esg-integration",
        (Role::SustainabilityDirector, _) => "/workspace/carbon-footprint",
        (Role::OperationsManager, Industry::Technology) => "/workspace/performance-analytics",
        (Role::OperationsManager, _) => "/workspace/risk-assessment",
        (Role::ComplianceOfficer, _) => "/workspace/compliance-automation",
        (Role::Other, _) => "/workspace/dashboard",
    };
    Some(route)
}

/// Returns the dashboard description for a role/industry pair.
///
/// Supply chain managers and ESG officers have copy for every industry.
/// The remaining roles only carry an `Other` cell, which named industries
/// reach through the industry fallback.
#[must_use]
pub const fn description_cell(role: Role, industry: Industry) -> Option<&'static str> {
    match role {
        Role::SupplyChainManager => Some(supply_chain_description(industry)),
        Role::EsgOfficer => Some(esg_officer_description(industry)),
        Role::SustainabilityDirector => match industry {
            Industry::Other => Some(
                "Track emissions across scopes 1, 2 and 3 and measure progress against your reduction targets.",
            ),
            _ => None,
        },
        Role::OperationsManager => match industry {
            Industry::Other => Some(
                "Spot operational risks early and keep facilities, suppliers and logistics running smoothly.",
            ),
            _ => None,
        },
        Role::ComplianceOfficer => match industry {
            Industry::Other => Some(
                "Automate regulatory checks and keep audit-ready evidence for every obligation in one place.",
            ),
            _ => None,
        },
        Role::Other => match industry {
            Industry::Other => Some(
                "Explore risk, sustainability and supply chain insights tailored to your organization.",
            ),
            _ => None,
        },
    }
}

const fn supply_chain_description(industry: Industry) -> &'static str {
    match industry {
        Industry::Manufacturing => {
            "Map tier-n suppliers behind your production lines and flag raw material sourcing risks."
        }
        Industry::Retail => {
            "Trace products from shelf to source and verify supplier labor and sourcing practices."
        }
        Industry::Technology => {
            "Monitor component suppliers and conflict mineral exposure across your hardware supply chain."
        }
        Industry::Healthcare => {
            "Secure medical supply continuity and assess the ESG performance of pharmaceutical suppliers."
        }
        Industry::Energy => {
            "Visualize fuel and equipment supply routes and track environmental risk at extraction sites."
        }
        Industry::Agriculture => {
            "Follow crops from farm to buyer and monitor deforestation and land-use risk in your sourcing regions."
        }
        Industry::Finance => {
            "Assess the supply chain exposure of portfolio companies and vendors you finance."
        }
        Industry::Other => {
            "Map your suppliers, identify supply chain risks and strengthen supplier relationships."
        }
    }
}

const fn esg_officer_description(industry: Industry) -> &'static str {
    match industry {
        Industry::Manufacturing => {
            "Consolidate plant-level emissions, waste and safety data into framework-aligned ESG reports."
        }
        Industry::Retail => {
            "Report on packaging, product sourcing and store energy use against leading ESG frameworks."
        }
        Industry::Technology => {
            "Measure data center energy, e-waste and governance metrics for investor-grade ESG disclosure."
        }
        Industry::Healthcare => {
            "Integrate patient safety, access and environmental metrics into your ESG reporting."
        }
        Industry::Energy => {
            "Disclose transition plans, emissions intensity and biodiversity impact with confidence."
        }
        Industry::Agriculture => {
            "Report on land use, water stewardship and biodiversity outcomes across your operations."
        }
        Industry::Finance => {
            "Integrate financed emissions and ESG ratings into portfolio-level disclosure."
        }
        Industry::Other => {
            "Collect ESG data across your organization and produce reports aligned with major frameworks."
        }
    }
}

/// Iterates every `(role, industry, route)` triple in declaration order.
pub fn routing_matrix() -> impl Iterator<Item = (Role, Industry, &'static str)> {
    Role::ALL.into_iter().flat_map(|role| {
        Industry::ALL.into_iter().filter_map(move |industry| {
            route_cell(role, industry).map(|route| (role, industry, route))
        })
    })
}
