// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Manage the IAM policy of a key.

pub mod add_member;
pub mod get_policy;
pub mod remove_member;

use google_cloud_iam_v1::model::{Binding, Policy};

/// The role granting use of a key for encryption and decryption.
pub const ENCRYPTER_DECRYPTER_ROLE: &str = "roles/cloudkms.cryptoKeyEncrypterDecrypter";

/// Adds `member` to the binding for `role`, creating the binding if needed.
///
/// Returns false if the member already had the role.
pub fn add_binding(policy: &mut Policy, role: &str, member: &str) -> bool {
    match policy.bindings.iter_mut().find(|b| b.role == role) {
        Some(b) if b.members.iter().any(|m| m == member) => false,
        Some(b) => {
            b.members.push(member.to_string());
            true
        }
        None => {
            policy
                .bindings
                .push(Binding::new().set_role(role).set_members([member]));
            true
        }
    }
}

/// Removes `member` from the binding for `role`, dropping empty bindings.
///
/// Returns false if the member did not have the role.
pub fn remove_binding(policy: &mut Policy, role: &str, member: &str) -> bool {
    let mut removed = false;
    for b in policy.bindings.iter_mut().filter(|b| b.role == role) {
        let before = b.members.len();
        b.members.retain(|m| m != member);
        removed |= b.members.len() != before;
    }
    policy.bindings.retain(|b| !b.members.is_empty());
    removed
}

pub(crate) fn print_policy(policy: &Policy) {
    println!("IAM policy:");
    for b in &policy.bindings {
        println!("Role: {}", b.role);
        for m in &b.members {
            println!("\t{m}");
        }
    }
}
