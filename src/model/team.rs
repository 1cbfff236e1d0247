use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::pipeline::sanitize::{defaults, text_or, Sanitize};
use crate::pipeline::ListRecord;

const LEADERSHIP_SLOTS: usize = 2;
const CORE_SLOTS: usize = 4;

/// A team member row as stored in the `team_members` table.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTeamMemberRecord {
    pub id: i64,
    pub name: String,
    pub role: Option<String>,
    pub image_url: Option<String>,
    pub linkedin_url: Option<String>,
}

/// A render-ready team member card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMember {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub image_url: String,
    /// The card only shows a LinkedIn icon when a link exists.
    pub linkedin_url: Option<String>,
}

impl Sanitize for RawTeamMemberRecord {
    type Clean = TeamMember;

    fn sanitize(&self) -> TeamMember {
        TeamMember {
            id: self.id,
            name: self.name.clone(),
            role: text_or(&self.role, defaults::ROLE),
            image_url: text_or(&self.image_url, defaults::PORTRAIT_IMAGE),
            linkedin_url: self.linkedin_url.clone(),
        }
    }
}

impl ListRecord for TeamMember {
    type Facet = Infallible;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.role]
    }
}

/// The team page's fixed display groups, in roster order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSections {
    pub leadership: Vec<TeamMember>,
    pub core: Vec<TeamMember>,
    pub members: Vec<TeamMember>,
}

impl TeamSections {
    /// Split an ordered roster into leadership (first 2), core team
    /// (next 4), and general members (the rest). Short rosters fill the
    /// groups front to back.
    pub fn partition(roster: Vec<TeamMember>) -> Self {
        let mut rest = roster.into_iter();
        let leadership = rest.by_ref().take(LEADERSHIP_SLOTS).collect();
        let core = rest.by_ref().take(CORE_SLOTS).collect();
        let members = rest.collect();
        Self {
            leadership,
            core,
            members,
        }
    }
}
