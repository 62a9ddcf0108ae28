use yew::prelude::*;

use crate::config;
use crate::content::{Award, Office, PortfolioItem, Service, TeamMember};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: &'static Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <div class="service-card">
            <h3>{props.service.title}</h3>
            <p>{props.service.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioTileProps {
    pub item: &'static PortfolioItem,
}

#[function_component(PortfolioTile)]
pub fn portfolio_tile(props: &PortfolioTileProps) -> Html {
    let title = props.item.title;
    html! {
        <div class="portfolio-tile">
            <img src={config::placeholder_url(400, 300)} alt={title} />
            <div class="portfolio-overlay">
                <h3>{title}</h3>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AwardBadgeProps {
    pub award: &'static Award,
}

#[function_component(AwardBadge)]
pub fn award_badge(props: &AwardBadgeProps) -> Html {
    html! {
        <div class="award-badge">
            <span class="award-icon">{"🏆"}</span>
            <span>{props.award.label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamMemberCardProps {
    pub member: &'static TeamMember,
}

#[function_component(TeamMemberCard)]
pub fn team_member_card(props: &TeamMemberCardProps) -> Html {
    let TeamMember { name, role } = props.member;
    html! {
        <div class="team-member">
            <div class="team-avatar">
                <img src={config::placeholder_url(128, 128)} alt={*name} />
            </div>
            <h3>{*name}</h3>
            <p>{*role}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OfficeCardProps {
    pub office: &'static Office,
}

#[function_component(OfficeCard)]
pub fn office_card(props: &OfficeCardProps) -> Html {
    let office = props.office;
    html! {
        <div class="office-card">
            <h3>{office.heading}</h3>
            <div class="office-line">
                <span class="office-icon">{"📍"}</span>
                <p>{office.address}</p>
            </div>
            <div class="office-line">
                <span class="office-icon">{"📞"}</span>
                <p>{office.phone}</p>
            </div>
            <div class="office-line">
                <span class="office-icon">{"✉"}</span>
                <p>{office.email}</p>
            </div>
        </div>
    }
}
