use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod oracle;
pub mod pda;
pub mod reward;
pub mod states;
pub mod utils;

pub use constants::*;
pub use instructions::*;
pub use states::*;

declare_id!("Wjohi3sw13ZnDLJ2Fhwvfiz6WFyBMBvr9PRaoWny9yi");

#[program]
pub mod donation_protocol {
    use super::*;

    pub fn initialize_protocol(
        ctx: Context<InitializeProtocol>,
        min_amount_to_earn: u64,
        min_amount_to_collect: u64,
        reward_rate_numerator: u64,
        reward_rate_denominator: u64,
    ) -> Result<()> {
        instructions::handle_initialize_protocol(
            ctx,
            min_amount_to_earn,
            min_amount_to_collect,
            reward_rate_numerator,
            reward_rate_denominator,
        )
    }

    pub fn authorize_price_program(
        ctx: Context<AuthorizePriceProgram>,
        program_id: Pubkey,
    ) -> Result<()> {
        instructions::handle_authorize_price_program(ctx, program_id)
    }

    pub fn authorize_pool(ctx: Context<AuthorizePool>) -> Result<()> {
        instructions::handle_authorize_pool(ctx)
    }

    pub fn register_creator(ctx: Context<RegisterCreator>) -> Result<()> {
        instructions::handle_register_creator(ctx)
    }

    pub fn register_contributor(ctx: Context<RegisterContributor>) -> Result<()> {
        instructions::handle_register_contributor(ctx)
    }

    pub fn create_campaign(
        ctx: Context<CreateCampaign>,
        amount_collecting: u64,
        content_reference: String,
        ending_timestamp: i64,
    ) -> Result<()> {
        instructions::handle_create_campaign(
            ctx,
            amount_collecting,
            content_reference,
            ending_timestamp,
        )
    }

    pub fn contribute(ctx: Context<Contribute>, amount: u64) -> Result<()> {
        instructions::handle_contribute(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::handle_withdraw(ctx)
    }
}
