//! The /chosen command: picks a random guild member.

use rand::seq::IndexedRandom;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption, Member,
    Mention, RoleId, UserId,
};
use serenity::async_trait;

use crate::{
    command::{option_str, respond, CommandHandler},
    error::AppError,
};

/// Reply sent when no member survives the eligibility filter.
const NO_ELIGIBLE_MEMBERS: &str = "No eligible members found.";

/// The fields of a guild member that eligibility depends on.
///
/// Extracted from `serenity::all::Member` so the filter and the random
/// pick stay testable without Discord I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub user_id: UserId,
    pub bot: bool,
    pub roles: Vec<RoleId>,
}

impl From<&Member> for Candidate {
    fn from(member: &Member) -> Self {
        Self {
            user_id: member.user.id,
            bot: member.user.bot,
            roles: member.roles.clone(),
        }
    }
}

/// Filters candidates down to the eligible pool.
///
/// Bots are always excluded. When a role is given, only members carrying
/// that role remain.
fn eligible(candidates: &[Candidate], role: Option<RoleId>) -> Vec<UserId> {
    candidates
        .iter()
        .filter(|candidate| !candidate.bot)
        .filter(|candidate| role.map_or(true, |role_id| candidate.roles.contains(&role_id)))
        .map(|candidate| candidate.user_id)
        .collect()
}

/// Picks one random member of the guild, optionally restricted to a role.
pub struct ChosenCommand;

#[async_trait]
impl CommandHandler for ChosenCommand {
    fn name(&self) -> &'static str {
        "chosen"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new(self.name())
            .description("Sniffs out the true chosen")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "role",
                    "Role to choose from (optional)",
                )
                .required(false),
            )
    }

    async fn handle(&self, ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
        let Some(guild_id) = command.guild_id else {
            return respond(ctx, command, "This command only works in a server.").await;
        };

        // Resolve the optional role name against the guild's role list. An
        // unknown role name leaves nobody eligible.
        let role_id = match option_str(command, "role") {
            Some(role_name) => {
                let roles = guild_id.roles(&ctx.http).await?;
                let Some(role_id) = roles
                    .values()
                    .find(|role| role.name == role_name)
                    .map(|role| role.id)
                else {
                    return respond(ctx, command, NO_ELIGIBLE_MEMBERS).await;
                };

                Some(role_id)
            }
            None => None,
        };

        // Fetching the member list requires the privileged GUILD_MEMBERS
        // intent.
        let members = guild_id.members(&ctx.http, None, None).await?;
        let candidates: Vec<Candidate> = members.iter().map(Candidate::from).collect();

        let pool = eligible(&candidates, role_id);
        let Some(chosen) = pool.choose(&mut rand::rng()) else {
            return respond(ctx, command, NO_ELIGIBLE_MEMBERS).await;
        };

        respond(
            ctx,
            command,
            format!("I have chosen thee {}", Mention::User(*chosen)),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(user_id: u64, bot: bool, roles: &[u64]) -> Candidate {
        Candidate {
            user_id: UserId::new(user_id),
            bot,
            roles: roles.iter().map(|id| RoleId::new(*id)).collect(),
        }
    }

    /// Tests that bots never enter the eligible pool.
    ///
    /// Expected: only the human members remain
    #[test]
    fn excludes_bots() {
        let candidates = vec![
            candidate(1, false, &[]),
            candidate(2, true, &[]),
            candidate(3, false, &[]),
        ];

        let pool = eligible(&candidates, None);

        assert_eq!(pool, vec![UserId::new(1), UserId::new(3)]);
    }

    /// Tests that a role filter keeps only members carrying the role.
    ///
    /// Expected: members without the role are dropped, bots stay excluded
    #[test]
    fn restricts_to_role_members() {
        let role = RoleId::new(42);
        let candidates = vec![
            candidate(1, false, &[42]),
            candidate(2, false, &[7]),
            candidate(3, true, &[42]),
        ];

        let pool = eligible(&candidates, Some(role));

        assert_eq!(pool, vec![UserId::new(1)]);
    }

    /// Tests the empty guild edge case.
    ///
    /// Expected: empty pool, the command replies with the no-members text
    #[test]
    fn empty_candidates_yield_empty_pool() {
        assert!(eligible(&[], None).is_empty());
    }

    /// Tests that a random pick from the pool always lands in the pool.
    ///
    /// Expected: Some element of the pool for every draw
    #[test]
    fn chooses_from_pool() {
        let candidates = vec![candidate(1, false, &[]), candidate(2, false, &[])];
        let pool = eligible(&candidates, None);

        for _ in 0..20 {
            let chosen = pool.choose(&mut rand::rng()).copied().unwrap();
            assert!(pool.contains(&chosen));
        }
    }
}
