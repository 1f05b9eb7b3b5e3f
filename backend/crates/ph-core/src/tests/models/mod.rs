mod address;
mod otp_record;
mod user;
mod user_role;
