//! Drives campaigns through create, contribute and withdraw the way the
//! instruction handlers do, with token balances kept in memory.

use anchor_lang::prelude::*;
use donation_protocol::{
    engine::{plan_campaign, plan_contribution, plan_withdrawal, WithdrawalPlan},
    errors::DonationError,
    oracle::PoolQuote,
    pda,
    reward::RewardRate,
    utils::Q64,
    AuthorizedPriceProgram, Campaign, CampaignTerms, ContributorLedger, CreatorLedger,
    ProtocolConfig,
};

const NOW: i64 = 1_700_000_000;

struct Harness {
    config_key: Pubkey,
    config: ProtocolConfig,
    creator_ledger: CreatorLedger,
    contributor_ledger: ContributorLedger,
    contributor_balance: u64,
    contributor_rewards: u64,
    treasury_balance: u64,
    holding_balance: u64,
    recipient_balance: u64,
}

impl Harness {
    fn new(treasury_balance: u64) -> Self {
        let config_key = Pubkey::new_unique();
        let config = ProtocolConfig {
            authority: Pubkey::new_unique(),
            default_donation_mint: Pubkey::new_unique(),
            reward_mint: Pubkey::new_unique(),
            reward_treasury: pda::find_reward_treasury_address(&config_key).0,
            treasury_owner_bump: pda::find_treasury_owner_address(&config_key).1,
            min_amount_to_earn: 1_000_000,
            min_amount_to_collect: 1_000_000,
            reward_rate: RewardRate::new(1, 10).unwrap(),
        };

        let creator = Pubkey::new_unique();
        let mut creator_ledger = CreatorLedger::default();
        let (_, creator_bump) = pda::find_creator_ledger_address(&config_key, &creator);
        creator_ledger
            .register(config_key, creator, creator_bump)
            .unwrap();

        let contributor = Pubkey::new_unique();
        let mut contributor_ledger = ContributorLedger::default();
        let (_, contributor_bump) = pda::find_contributor_ledger_address(&config_key, &contributor);
        contributor_ledger
            .register(config_key, contributor, contributor_bump)
            .unwrap();

        Self {
            config_key,
            config,
            creator_ledger,
            contributor_ledger,
            contributor_balance: 10_000_000_000,
            contributor_rewards: 0,
            treasury_balance,
            holding_balance: 0,
            recipient_balance: 0,
        }
    }

    fn create(&mut self, target: u64, reference: &str, ending_timestamp: i64) -> Result<Campaign> {
        let donation_mint = self.config.default_donation_mint;
        self.create_priced(donation_mint, None, target, reference, ending_timestamp)
    }

    fn create_priced(
        &mut self,
        donation_mint: Pubkey,
        quote: Option<&PoolQuote>,
        target: u64,
        reference: &str,
        ending_timestamp: i64,
    ) -> Result<Campaign> {
        let amount_collecting_default = plan_campaign(
            &self.config,
            &donation_mint,
            target,
            reference,
            ending_timestamp,
            NOW,
            quote,
        )?;
        self.creator_ledger
            .record_campaign_created(amount_collecting_default)?;

        let creator_ledger_key = Pubkey::new_unique();
        let (campaign_key, bump) = pda::find_campaign_address(
            &creator_ledger_key,
            self.creator_ledger.donations_created_count - 1,
        );
        let (holding_wallet, _) = pda::find_holding_wallet_address(&campaign_key);
        let (_, holding_bump) = pda::find_holding_owner_address(&campaign_key);

        let mut campaign = Campaign::default();
        campaign.open(CampaignTerms {
            protocol_config: self.config_key,
            creator_ledger: creator_ledger_key,
            donation_mint,
            recipient: Pubkey::new_unique(),
            holding_wallet,
            price_pool: quote.map(|quote| quote.pool).unwrap_or_default(),
            amount_collecting: target,
            amount_collecting_default,
            ending_timestamp,
            content_reference: reference.to_string(),
            bump,
            holding_bump,
        });
        Ok(campaign)
    }

    fn contribute(&mut self, campaign: &mut Campaign, amount: u64) -> Result<u64> {
        self.contribute_priced(campaign, amount, None)
    }

    fn contribute_priced(
        &mut self,
        campaign: &mut Campaign,
        amount: u64,
        quote: Option<&PoolQuote>,
    ) -> Result<u64> {
        let plan = plan_contribution(
            &self.config,
            campaign,
            amount,
            self.contributor_balance,
            self.treasury_balance,
            quote,
        )?;
        campaign.accept_contribution(plan.amount, plan.usdc_equivalent)?;
        self.contributor_ledger
            .record_contribution(plan.usdc_equivalent, plan.reward)?;

        self.contributor_balance -= plan.amount;
        self.holding_balance += plan.amount;
        self.treasury_balance -= plan.reward;
        self.contributor_rewards += plan.reward;
        Ok(plan.reward)
    }

    fn withdraw(&mut self, campaign: &mut Campaign, now: i64) -> Result<WithdrawalPlan> {
        let plan = plan_withdrawal(&self.config, campaign, now, self.holding_balance)?;
        self.creator_ledger
            .record_campaign_closed(plan.amount_credited, campaign.amount_collecting_default)?;
        campaign.close()?;

        self.holding_balance -= plan.amount;
        self.recipient_balance += plan.amount;
        Ok(plan)
    }
}

#[test]
fn campaign_closes_once_target_is_collected() {
    let mut harness = Harness::new(0);
    let mut campaign = harness.create(1_000_000_000, "h1", NOW + 100_000).unwrap();
    assert_eq!(harness.creator_ledger.total_amount_collecting, 1_000_000_000);
    assert_eq!(harness.creator_ledger.donations_created_count, 1);

    assert_eq!(harness.contribute(&mut campaign, 10_000_000).unwrap(), 0);
    assert_eq!(harness.contribute(&mut campaign, 10_000_000).unwrap(), 0);
    assert_eq!(harness.contributor_rewards, 0);
    assert_eq!(harness.contributor_ledger.donations_count, 2);

    let before = campaign.clone();
    let err = harness.withdraw(&mut campaign, NOW).unwrap_err();
    assert_eq!(err, DonationError::WithdrawalRequirementsNotMet.into());
    assert!(!campaign.is_closed);
    assert_eq!(campaign.total_amount_received, before.total_amount_received);
    assert_eq!(harness.holding_balance, 20_000_000);
    assert_eq!(harness.creator_ledger.donations_closed_count, 0);

    harness.contribute(&mut campaign, 980_000_000).unwrap();
    harness.withdraw(&mut campaign, NOW).unwrap();

    assert!(campaign.is_closed);
    assert_eq!(harness.recipient_balance, 1_000_000_000);
    assert_eq!(harness.holding_balance, 0);
    assert_eq!(harness.creator_ledger.total_amount_received, 1_000_000_000);
    assert_eq!(harness.creator_ledger.total_amount_collecting, 0);
    assert_eq!(harness.creator_ledger.donations_closed_count, 1);
    assert_eq!(harness.contributor_ledger.total_amount_donated, 1_000_000_000);
}

#[test]
fn closed_campaign_rejects_further_activity() {
    let mut harness = Harness::new(0);
    let mut campaign = harness.create(5_000_000, "h1", NOW + 10).unwrap();
    harness.contribute(&mut campaign, 5_000_000).unwrap();
    harness.withdraw(&mut campaign, NOW).unwrap();

    assert_eq!(
        harness.withdraw(&mut campaign, NOW + 20).unwrap_err(),
        DonationError::DonationClosed.into()
    );
    assert_eq!(
        harness.contribute(&mut campaign, 1_000_000).unwrap_err(),
        DonationError::DonationClosed.into()
    );
    assert_eq!(harness.creator_ledger.donations_closed_count, 1);
    assert_eq!(harness.recipient_balance, 5_000_000);
}

#[test]
fn contributing_the_exact_target_allows_immediate_withdrawal() {
    let target = 7_654_321;
    let mut harness = Harness::new(0);
    let mut campaign = harness.create(target, "h1", NOW + 1_000_000).unwrap();
    harness.contribute(&mut campaign, target).unwrap();
    assert!(campaign.can_withdraw(NOW));
    harness.withdraw(&mut campaign, NOW).unwrap();
    assert_eq!(harness.recipient_balance, target);
}

#[test]
fn campaign_can_be_withdrawn_after_deadline_below_target() {
    let mut harness = Harness::new(0);
    let mut campaign = harness.create(1_000_000_000, "h1", NOW + 100).unwrap();
    harness.contribute(&mut campaign, 3_000_000).unwrap();

    assert!(harness.withdraw(&mut campaign, NOW + 99).is_err());
    harness.withdraw(&mut campaign, NOW + 100).unwrap();

    assert_eq!(harness.recipient_balance, 3_000_000);
    assert_eq!(harness.creator_ledger.total_amount_received, 3_000_000);
    assert_eq!(harness.creator_ledger.total_amount_collecting, 0);
}

#[test]
fn past_deadline_creates_nothing() {
    let mut harness = Harness::new(0);
    let err = harness.create(1_000_000_000, "h1", NOW - 1).unwrap_err();
    assert_eq!(err, DonationError::InvalidDeadline.into());
    assert_eq!(harness.creator_ledger.donations_created_count, 0);
    assert_eq!(harness.creator_ledger.total_amount_collecting, 0);
}

#[test]
fn rewards_are_paid_while_the_treasury_covers_them() {
    let mut harness = Harness::new(1_500_000);
    let mut campaign = harness.create(1_000_000_000, "h1", NOW + 100).unwrap();

    // 10% of 10_000_000
    assert_eq!(harness.contribute(&mut campaign, 10_000_000).unwrap(), 1_000_000);
    // the remaining 500_000 can not cover the next reward
    assert_eq!(harness.contribute(&mut campaign, 10_000_000).unwrap(), 0);
    // below min_amount_to_earn
    assert_eq!(harness.contribute(&mut campaign, 999_999).unwrap(), 0);

    assert_eq!(harness.treasury_balance, 500_000);
    assert_eq!(harness.contributor_rewards, 1_000_000);
    assert_eq!(harness.contributor_ledger.total_amount_earned, 1_000_000);
    assert_eq!(harness.contributor_ledger.donations_count, 3);
}

#[test]
fn contribution_above_balance_changes_nothing() {
    let mut harness = Harness::new(0);
    let mut campaign = harness.create(1_000_000_000, "h1", NOW + 100).unwrap();
    let balance = harness.contributor_balance;

    let err = harness.contribute(&mut campaign, balance + 1).unwrap_err();
    assert_eq!(err, DonationError::InsufficientFunds.into());
    assert_eq!(campaign.total_amount_received, 0);
    assert_eq!(harness.contributor_ledger.donations_count, 0);
    assert_eq!(harness.holding_balance, 0);
}

#[test]
fn only_the_authority_authorizes_price_programs() {
    let harness = Harness::new(0);
    let clmm = Pubkey::new_unique();
    let (_, bump) = pda::find_authorized_price_program_address(&harness.config_key, &clmm);

    let mut record = AuthorizedPriceProgram::default();
    let err = record
        .authorize(
            harness.config_key,
            &harness.config,
            &Pubkey::new_unique(),
            clmm,
            bump,
        )
        .unwrap_err();
    assert_eq!(err, DonationError::Unauthorized.into());
    assert!(!record.is_initialized());

    record
        .authorize(
            harness.config_key,
            &harness.config,
            &harness.config.authority,
            clmm,
            bump,
        )
        .unwrap();
    assert!(record.is_initialized());
    assert_eq!(record.program_id, clmm);
}

/// USDC is token0, BONK token1, 2_500 BONK base units per USDC base unit.
fn bonk_quote(harness: &Harness, bonk: Pubkey, sqrt_price_x64: u128) -> PoolQuote {
    PoolQuote {
        pool: Pubkey::new_unique(),
        mint_0: harness.config.default_donation_mint,
        mint_1: bonk,
        sqrt_price_x64,
    }
}

#[test]
fn non_default_token_campaign_is_accounted_in_default_units() {
    let mut harness = Harness::new(150_000);
    let bonk = Pubkey::new_unique();
    let quote = bonk_quote(&harness, bonk, 50 * Q64);

    let mut campaign = harness
        .create_priced(bonk, Some(&quote), 5_000_000_000, "h1", NOW + 100_000)
        .unwrap();
    assert_eq!(campaign.price_pool, quote.pool);
    assert_eq!(campaign.amount_collecting, 5_000_000_000);
    assert_eq!(campaign.amount_collecting_default, 2_000_000);
    assert_eq!(harness.creator_ledger.total_amount_collecting, 2_000_000);

    // 1 USDC worth earns 10%
    let reward = harness
        .contribute_priced(&mut campaign, 2_500_000_000, Some(&quote))
        .unwrap();
    assert_eq!(reward, 100_000);
    // 0.4 USDC worth is under min_amount_to_earn
    let reward = harness
        .contribute_priced(&mut campaign, 1_000_000_000, Some(&quote))
        .unwrap();
    assert_eq!(reward, 0);
    assert_eq!(campaign.total_tokens_received, 3_500_000_000);
    assert_eq!(campaign.total_amount_received, 1_400_000);

    let err = harness.withdraw(&mut campaign, NOW).unwrap_err();
    assert_eq!(err, DonationError::WithdrawalRequirementsNotMet.into());

    // the remaining 50_000 in the treasury can not cover another 100_000
    let reward = harness
        .contribute_priced(&mut campaign, 2_500_000_000, Some(&quote))
        .unwrap();
    assert_eq!(reward, 0);
    assert_eq!(campaign.total_tokens_received, 6_000_000_000);
    assert_eq!(campaign.total_amount_received, 2_400_000);
    assert!(campaign.is_target_reached());

    let plan = harness.withdraw(&mut campaign, NOW).unwrap();
    assert_eq!(plan.amount, 6_000_000_000);
    assert_eq!(plan.amount_credited, 2_400_000);
    assert!(campaign.is_closed);
    assert_eq!(harness.recipient_balance, 6_000_000_000);

    assert_eq!(harness.creator_ledger.total_amount_received, 2_400_000);
    assert_eq!(harness.creator_ledger.total_amount_collecting, 0);
    assert_eq!(harness.creator_ledger.donations_closed_count, 1);
    assert_eq!(harness.contributor_ledger.total_amount_donated, 2_400_000);
    assert_eq!(harness.contributor_ledger.total_amount_earned, 100_000);
    assert_eq!(harness.contributor_ledger.donations_count, 3);
    assert_eq!(harness.treasury_balance, 50_000);
}

#[test]
fn contribution_priced_by_another_pool_is_rejected() {
    let mut harness = Harness::new(10_000_000);
    let bonk = Pubkey::new_unique();
    let campaign_pool = bonk_quote(&harness, bonk, 50 * Q64);
    let cheaper_pool = bonk_quote(&harness, bonk, 5 * Q64);

    let mut campaign = harness
        .create_priced(bonk, Some(&campaign_pool), 5_000_000_000, "h1", NOW + 100)
        .unwrap();

    let err = harness
        .contribute_priced(&mut campaign, 1_000_000_000, Some(&cheaper_pool))
        .unwrap_err();
    assert_eq!(err, DonationError::UnauthorizedPriceSource.into());
    assert_eq!(campaign.total_tokens_received, 0);
    assert_eq!(harness.contributor_ledger.donations_count, 0);
    assert_eq!(harness.treasury_balance, 10_000_000);

    let err = harness.contribute_priced(&mut campaign, 1_000_000_000, None).unwrap_err();
    assert_eq!(err, DonationError::UnauthorizedPriceSource.into());

    harness
        .contribute_priced(&mut campaign, 1_000_000_000, Some(&campaign_pool))
        .unwrap();
    assert_eq!(campaign.total_amount_received, 400_000);
}
