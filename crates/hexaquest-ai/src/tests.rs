#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use hexaquest_core::constants::*;
    use hexaquest_core::enums::AbilityKind;

    use crate::policy::*;
    use crate::profiles::*;

    fn make_context(is_boss: bool, hp_fraction: f64, distance: f64, now: f64) -> EnemyContext {
        let max_hp = enemy_profile(10, is_boss).max_hp;
        EnemyContext {
            is_boss,
            hp: max_hp * hp_fraction,
            max_hp,
            distance_to_player: distance,
            now,
            stage: 10,
        }
    }

    #[test]
    fn test_never_used_ability_is_ready() {
        assert!(ability_ready(&fireball(), 0.0));
    }

    #[test]
    fn test_cooldown_boundary_is_inclusive() {
        let mut ability = fireball();
        ability.last_used = Some(1.0);
        assert!(!ability_ready(&ability, 4.999));
        assert!(ability_ready(&ability, 5.0));
    }

    #[test]
    fn test_boss_prefers_nova_in_range() {
        let ctx = make_context(true, 1.0, 6.0, 0.0);
        let action = evaluate(&ctx, &boss_loadout());
        assert_eq!(
            action,
            EnemyAction::Cast {
                index: 0,
                kind: AbilityKind::Aoe
            }
        );
    }

    #[test]
    fn test_boss_falls_back_to_fireball_beyond_nova_range() {
        let ctx = make_context(true, 1.0, 12.0, 0.0);
        let action = evaluate(&ctx, &boss_loadout());
        assert_eq!(
            action,
            EnemyAction::Cast {
                index: 1,
                kind: AbilityKind::Ranged
            }
        );
    }

    #[test]
    fn test_enrage_only_below_half_hp() {
        let mut kit = boss_loadout();
        // Put the attacks on cooldown so only the buff is in contention.
        kit[0].last_used = Some(0.0);
        kit[1].last_used = Some(0.0);

        let healthy = make_context(true, 0.6, 2.0, 1.0);
        assert_eq!(select_ability(&kit, &healthy), None);

        let hurt = make_context(true, 0.4, 2.0, 1.0);
        assert_eq!(select_ability(&kit, &hurt), Some(2));
    }

    #[test]
    fn test_out_of_range_enemy_advances() {
        let ctx = make_context(false, 1.0, 30.0, 0.0);
        let action = evaluate(&ctx, &minion_loadout(0.1));
        assert_eq!(
            action,
            EnemyAction::Advance {
                speed: ENEMY_BASE_SPEED + 10.0 * ENEMY_SPEED_PER_STAGE
            }
        );
    }

    #[test]
    fn test_in_reach_enemy_melees() {
        let ctx = make_context(false, 1.0, 1.0, 0.0);
        assert_eq!(evaluate(&ctx, &[]), EnemyAction::Melee);

        // Bosses stop further out.
        let ctx = make_context(true, 1.0, 3.5, 0.0);
        let mut kit = boss_loadout();
        for ability in &mut kit {
            ability.last_used = Some(0.0);
        }
        assert_eq!(evaluate(&ctx, &kit), EnemyAction::Melee);
    }

    #[test]
    fn test_melee_kind_is_never_cast() {
        let mut ability = smash();
        ability.kind = AbilityKind::Melee;
        let ctx = make_context(false, 1.0, 1.0, 0.0);
        assert!(!is_eligible(&ability, &ctx));
    }

    /// Consecutive fixed-dt ticks: a ranged ability fires, is locked for its
    /// cooldown, then fires again on the first tick at or past the boundary.
    #[test]
    fn test_cooldown_gating_across_ticks() {
        let mut kit = vec![rock_throw()];
        let mut casts = Vec::new();
        let mut now = 0.0;
        for tick in 0..(TICK_RATE * 11) {
            let ctx = EnemyContext {
                is_boss: false,
                hp: 10.0,
                max_hp: 10.0,
                distance_to_player: 5.0,
                now,
                stage: 1,
            };
            if let EnemyAction::Cast { index, .. } = evaluate(&ctx, &kit) {
                kit[index].last_used = Some(now);
                casts.push(tick);
            }
            now += DT;
        }
        assert_eq!(casts.len(), 3);
        assert_eq!(casts[0], 0);
        // Floating accumulation may land the boundary one tick late, never early.
        for pair in casts.windows(2) {
            let gap = pair[1] - pair[0];
            assert!((300..=301).contains(&gap), "gap {gap}");
        }
    }

    #[test]
    fn test_melee_chance_matches_reference_frame() {
        assert!((melee_chance(DT) - MELEE_CHANCE_PER_REFERENCE_TICK).abs() < 1e-12);
        assert_eq!(melee_chance(0.0), 0.0);
        // Two half-frames compound to one full frame.
        let half = melee_chance(DT / 2.0);
        let combined = 1.0 - (1.0 - half) * (1.0 - half);
        assert!((combined - MELEE_CHANCE_PER_REFERENCE_TICK).abs() < 1e-12);
    }

    #[test]
    fn test_roll_melee_is_seeded() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        let rolls_a: Vec<bool> = (0..200).map(|_| roll_melee(&mut a, DT)).collect();
        let rolls_b: Vec<bool> = (0..200).map(|_| roll_melee(&mut b, DT)).collect();
        assert_eq!(rolls_a, rolls_b);
    }

    #[test]
    fn test_chase_step_does_not_overshoot() {
        let step = chase_step(DVec2::ZERO, DVec2::new(0.1, 0.0), 10.0, 1.0);
        assert_eq!(step, DVec2::new(0.1, 0.0));
        let step = chase_step(DVec2::ZERO, DVec2::new(10.0, 0.0), 3.0, 0.5);
        assert!((step.x - 1.5).abs() < 1e-12);
        assert_eq!(chase_step(DVec2::ONE, DVec2::ONE, 3.0, 0.5), DVec2::ZERO);
    }

    #[test]
    fn test_boss_profile_stage_ten() {
        let boss = enemy_profile(10, true);
        let expected = 30.0 * 1.15f64.powi(10) * 8.0;
        assert!((boss.max_hp - expected).abs() < 1e-9);
        assert!((boss.max_hp - 970.93).abs() < 0.01);
        assert_eq!(boss.damage, 20.0);
        assert_eq!(melee_reach(true), BOSS_MELEE_REACH);

        let minion = enemy_profile(10, false);
        assert!((boss.max_hp / minion.max_hp - BOSS_HP_MULTIPLIER).abs() < 1e-9);
        assert!(chase_speed(10, true) < chase_speed(10, false));
    }

    #[test]
    fn test_minion_loadout_rolls() {
        assert_eq!(minion_loadout(0.0)[0].name, "Rock Throw");
        assert_eq!(minion_loadout(0.29)[0].name, "Rock Throw");
        assert!(minion_loadout(0.3).is_empty());
        assert!(minion_loadout(0.79).is_empty());
        assert_eq!(minion_loadout(0.8)[0].name, "Smash");
    }

    #[test]
    fn test_boss_loadout_order_and_name() {
        let names: Vec<String> = boss_loadout().into_iter().map(|a| a.name).collect();
        assert_eq!(names, ["Nova", "Fireball", "Enrage"]);
        assert_eq!(boss_name(20), "Level 20 Guardian");
    }
}
