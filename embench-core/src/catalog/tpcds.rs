//! TPC-DS: 24 source tables and a representative query subset.
//!
//! Tables are aliased to their bare names so qualified bindings keep the
//! column references valid.

use super::{DdlDefinition, QueryDefinition, TableDefinition};

pub const QUERIES: &[QueryDefinition] = &[
    QueryDefinition {
        name: "tpcds-q3",
        sql: r#"
SELECT dt.d_year, item.i_brand_id brand_id, item.i_brand brand, SUM(ss_ext_sales_price) sum_agg
FROM {DATE_DIM_TABLE} dt, {STORE_SALES_TABLE} store_sales, {ITEM_TABLE} item
WHERE dt.d_date_sk = store_sales.ss_sold_date_sk
  AND store_sales.ss_item_sk = item.i_item_sk
  AND item.i_manufact_id = 128
  AND dt.d_moy = 11
GROUP BY dt.d_year, item.i_brand, item.i_brand_id
ORDER BY dt.d_year, sum_agg DESC, brand_id
LIMIT 100;
"#,
    },
    QueryDefinition {
        name: "tpcds-q7",
        sql: r#"
SELECT i_item_id,
       AVG(ss_quantity) agg1,
       AVG(ss_list_price) agg2,
       AVG(ss_coupon_amt) agg3,
       AVG(ss_sales_price) agg4
FROM {STORE_SALES_TABLE} store_sales, {CUSTOMER_DEMOGRAPHICS_TABLE} customer_demographics, {DATE_DIM_TABLE} date_dim, {ITEM_TABLE} item, {PROMOTION_TABLE} promotion
WHERE ss_sold_date_sk = d_date_sk
  AND ss_item_sk = i_item_sk
  AND ss_cdemo_sk = cd_demo_sk
  AND ss_promo_sk = p_promo_sk
  AND cd_gender = 'M'
  AND cd_marital_status = 'S'
  AND cd_education_status = 'College'
  AND (p_channel_email = 'N' OR p_channel_event = 'N')
  AND d_year = 2000
GROUP BY i_item_id
ORDER BY i_item_id
LIMIT 100;
"#,
    },
    QueryDefinition {
        name: "tpcds-q19",
        sql: r#"
SELECT i_brand_id brand_id, i_brand brand, i_manufact_id, i_manufact, SUM(ss_ext_sales_price) ext_price
FROM {DATE_DIM_TABLE} date_dim, {STORE_SALES_TABLE} store_sales, {ITEM_TABLE} item, {CUSTOMER_TABLE} customer, {CUSTOMER_ADDRESS_TABLE} customer_address, {STORE_TABLE} store
WHERE d_date_sk = ss_sold_date_sk
  AND ss_item_sk = i_item_sk
  AND i_manager_id = 8
  AND d_moy = 11
  AND d_year = 1998
  AND ss_customer_sk = c_customer_sk
  AND c_current_addr_sk = ca_address_sk
  AND SUBSTR(ca_zip, 1, 5) <> SUBSTR(s_zip, 1, 5)
  AND ss_store_sk = s_store_sk
GROUP BY i_brand, i_brand_id, i_manufact_id, i_manufact
ORDER BY ext_price DESC, i_brand, i_brand_id, i_manufact_id, i_manufact
LIMIT 100;
"#,
    },
    QueryDefinition {
        name: "tpcds-q26",
        sql: r#"
SELECT i_item_id,
       AVG(cs_quantity) agg1,
       AVG(cs_list_price) agg2,
       AVG(cs_coupon_amt) agg3,
       AVG(cs_sales_price) agg4
FROM {CATALOG_SALES_TABLE} catalog_sales, {CUSTOMER_DEMOGRAPHICS_TABLE} customer_demographics, {DATE_DIM_TABLE} date_dim, {ITEM_TABLE} item, {PROMOTION_TABLE} promotion
WHERE cs_sold_date_sk = d_date_sk
  AND cs_item_sk = i_item_sk
  AND cs_bill_cdemo_sk = cd_demo_sk
  AND cs_promo_sk = p_promo_sk
  AND cd_gender = 'M'
  AND cd_marital_status = 'S'
  AND cd_education_status = 'College'
  AND (p_channel_email = 'N' OR p_channel_event = 'N')
  AND d_year = 2000
GROUP BY i_item_id
ORDER BY i_item_id
LIMIT 100;
"#,
    },
    QueryDefinition {
        name: "tpcds-q42",
        sql: r#"
SELECT dt.d_year, item.i_category_id, item.i_category, SUM(ss_ext_sales_price)
FROM {DATE_DIM_TABLE} dt, {STORE_SALES_TABLE} store_sales, {ITEM_TABLE} item
WHERE dt.d_date_sk = store_sales.ss_sold_date_sk
  AND store_sales.ss_item_sk = item.i_item_sk
  AND item.i_manager_id = 1
  AND dt.d_moy = 11
  AND dt.d_year = 2000
GROUP BY dt.d_year, item.i_category_id, item.i_category
ORDER BY SUM(ss_ext_sales_price) DESC, dt.d_year, item.i_category_id, item.i_category
LIMIT 100;
"#,
    },
    QueryDefinition {
        name: "tpcds-q43",
        sql: r#"
SELECT s_store_name, s_store_id,
       SUM(CASE WHEN d_day_name = 'Sunday' THEN ss_sales_price ELSE NULL END) sun_sales,
       SUM(CASE WHEN d_day_name = 'Monday' THEN ss_sales_price ELSE NULL END) mon_sales,
       SUM(CASE WHEN d_day_name = 'Tuesday' THEN ss_sales_price ELSE NULL END) tue_sales,
       SUM(CASE WHEN d_day_name = 'Wednesday' THEN ss_sales_price ELSE NULL END) wed_sales,
       SUM(CASE WHEN d_day_name = 'Thursday' THEN ss_sales_price ELSE NULL END) thu_sales,
       SUM(CASE WHEN d_day_name = 'Friday' THEN ss_sales_price ELSE NULL END) fri_sales,
       SUM(CASE WHEN d_day_name = 'Saturday' THEN ss_sales_price ELSE NULL END) sat_sales
FROM {DATE_DIM_TABLE} date_dim, {STORE_SALES_TABLE} store_sales, {STORE_TABLE} store
WHERE d_date_sk = ss_sold_date_sk
  AND s_store_sk = ss_store_sk
  AND s_gmt_offset = -5
  AND d_year = 2000
GROUP BY s_store_name, s_store_id
ORDER BY s_store_name, s_store_id, sun_sales, mon_sales, tue_sales, wed_sales, thu_sales, fri_sales, sat_sales
LIMIT 100;
"#,
    },
    QueryDefinition {
        name: "tpcds-q52",
        sql: r#"
SELECT dt.d_year, item.i_brand_id brand_id, item.i_brand brand, SUM(ss_ext_sales_price) ext_price
FROM {DATE_DIM_TABLE} dt, {STORE_SALES_TABLE} store_sales, {ITEM_TABLE} item
WHERE dt.d_date_sk = store_sales.ss_sold_date_sk
  AND store_sales.ss_item_sk = item.i_item_sk
  AND item.i_manager_id = 1
  AND dt.d_moy = 11
  AND dt.d_year = 2000
GROUP BY dt.d_year, item.i_brand, item.i_brand_id
ORDER BY dt.d_year, ext_price DESC, brand_id
LIMIT 100;
"#,
    },
    QueryDefinition {
        name: "tpcds-q55",
        sql: r#"
SELECT i_brand_id brand_id, i_brand brand, SUM(ss_ext_sales_price) ext_price
FROM {DATE_DIM_TABLE} date_dim, {STORE_SALES_TABLE} store_sales, {ITEM_TABLE} item
WHERE d_date_sk = ss_sold_date_sk
  AND ss_item_sk = i_item_sk
  AND i_manager_id = 28
  AND d_moy = 11
  AND d_year = 1999
GROUP BY i_brand, i_brand_id
ORDER BY ext_price DESC, i_brand_id
LIMIT 100;
"#,
    },
    QueryDefinition {
        name: "tpcds-q96",
        sql: r#"
SELECT COUNT(*)
FROM {STORE_SALES_TABLE} store_sales, {HOUSEHOLD_DEMOGRAPHICS_TABLE} household_demographics, {TIME_DIM_TABLE} time_dim, {STORE_TABLE} store
WHERE ss_sold_time_sk = time_dim.t_time_sk
  AND ss_hdemo_sk = household_demographics.hd_demo_sk
  AND ss_store_sk = s_store_sk
  AND time_dim.t_hour = 20
  AND time_dim.t_minute >= 30
  AND household_demographics.hd_dep_count = 7
  AND store.s_store_name = 'ese'
ORDER BY COUNT(*)
LIMIT 100;
"#,
    },
    QueryDefinition {
        name: "tpcds-q98",
        sql: r#"
SELECT i_item_id, i_item_desc, i_category, i_class, i_current_price,
       SUM(ss_ext_sales_price) AS itemrevenue,
       SUM(ss_ext_sales_price) * 100 / SUM(SUM(ss_ext_sales_price)) OVER (PARTITION BY i_class) AS revenueratio
FROM {STORE_SALES_TABLE} store_sales, {ITEM_TABLE} item, {DATE_DIM_TABLE} date_dim
WHERE ss_item_sk = i_item_sk
  AND i_category IN ('Sports', 'Books', 'Home')
  AND ss_sold_date_sk = d_date_sk
  AND d_date BETWEEN CAST('1999-02-22' AS DATE) AND DATEADD(day, 30, CAST('1999-02-22' AS DATE))
GROUP BY i_item_id, i_item_desc, i_category, i_class, i_current_price
ORDER BY i_category, i_class, i_item_id, i_item_desc, revenueratio;
"#,
    },
];

pub const TABLES: &[TableDefinition] = &[
    TableDefinition { placeholder: "CALL_CENTER_TABLE", table: "call_center" },
    TableDefinition { placeholder: "CATALOG_PAGE_TABLE", table: "catalog_page" },
    TableDefinition { placeholder: "CATALOG_RETURNS_TABLE", table: "catalog_returns" },
    TableDefinition { placeholder: "CATALOG_SALES_TABLE", table: "catalog_sales" },
    TableDefinition { placeholder: "CUSTOMER_ADDRESS_TABLE", table: "customer_address" },
    TableDefinition { placeholder: "CUSTOMER_DEMOGRAPHICS_TABLE", table: "customer_demographics" },
    TableDefinition { placeholder: "CUSTOMER_TABLE", table: "customer" },
    TableDefinition { placeholder: "DATE_DIM_TABLE", table: "date_dim" },
    TableDefinition { placeholder: "HOUSEHOLD_DEMOGRAPHICS_TABLE", table: "household_demographics" },
    TableDefinition { placeholder: "INCOME_BAND_TABLE", table: "income_band" },
    TableDefinition { placeholder: "INVENTORY_TABLE", table: "inventory" },
    TableDefinition { placeholder: "ITEM_TABLE", table: "item" },
    TableDefinition { placeholder: "PROMOTION_TABLE", table: "promotion" },
    TableDefinition { placeholder: "REASON_TABLE", table: "reason" },
    TableDefinition { placeholder: "SHIP_MODE_TABLE", table: "ship_mode" },
    TableDefinition { placeholder: "STORE_RETURNS_TABLE", table: "store_returns" },
    TableDefinition { placeholder: "STORE_SALES_TABLE", table: "store_sales" },
    TableDefinition { placeholder: "STORE_TABLE", table: "store" },
    TableDefinition { placeholder: "TIME_DIM_TABLE", table: "time_dim" },
    TableDefinition { placeholder: "WAREHOUSE_TABLE", table: "warehouse" },
    TableDefinition { placeholder: "WEB_PAGE_TABLE", table: "web_page" },
    TableDefinition { placeholder: "WEB_RETURNS_TABLE", table: "web_returns" },
    TableDefinition { placeholder: "WEB_SALES_TABLE", table: "web_sales" },
    TableDefinition { placeholder: "WEB_SITE_TABLE", table: "web_site" },
];

pub const DDL: &[DdlDefinition] = &[
    DdlDefinition {
        table: "call_center",
        sql: r#"
CREATE OR REPLACE TABLE {CALL_CENTER_TABLE} (
  cc_call_center_sk INT,
  cc_call_center_id VARCHAR(16),
  cc_rec_start_date DATE,
  cc_rec_end_date DATE,
  cc_closed_date_sk INT,
  cc_open_date_sk INT,
  cc_name VARCHAR(50),
  cc_class VARCHAR(50),
  cc_employees INT,
  cc_sq_ft INT,
  cc_hours VARCHAR(20),
  cc_manager VARCHAR(40),
  cc_mkt_id INT,
  cc_mkt_class VARCHAR(50),
  cc_mkt_desc VARCHAR(100),
  cc_market_manager VARCHAR(40),
  cc_division INT,
  cc_division_name VARCHAR(50),
  cc_company INT,
  cc_company_name VARCHAR(50),
  cc_street_number VARCHAR(10),
  cc_street_name VARCHAR(60),
  cc_street_type VARCHAR(15),
  cc_suite_number VARCHAR(10),
  cc_city VARCHAR(60),
  cc_county VARCHAR(30),
  cc_state VARCHAR(2),
  cc_zip VARCHAR(10),
  cc_country VARCHAR(20),
  cc_gmt_offset DECIMAL(5,2),
  cc_tax_percentage DECIMAL(5,2)
);
"#,
    },
    DdlDefinition {
        table: "catalog_page",
        sql: r#"
CREATE OR REPLACE TABLE {CATALOG_PAGE_TABLE} (
  cp_catalog_page_sk INT,
  cp_catalog_page_id VARCHAR(16),
  cp_start_date_sk INT,
  cp_end_date_sk INT,
  cp_department VARCHAR(50),
  cp_catalog_number INT,
  cp_catalog_page_number INT,
  cp_description VARCHAR(100),
  cp_type VARCHAR(100)
);
"#,
    },
    DdlDefinition {
        table: "catalog_returns",
        sql: r#"
CREATE OR REPLACE TABLE {CATALOG_RETURNS_TABLE} (
  cr_returned_date_sk INT,
  cr_returned_time_sk INT,
  cr_item_sk INT,
  cr_refunded_customer_sk INT,
  cr_refunded_cdemo_sk INT,
  cr_refunded_hdemo_sk INT,
  cr_refunded_addr_sk INT,
  cr_returning_customer_sk INT,
  cr_returning_cdemo_sk INT,
  cr_returning_hdemo_sk INT,
  cr_returning_addr_sk INT,
  cr_call_center_sk INT,
  cr_catalog_page_sk INT,
  cr_ship_mode_sk INT,
  cr_warehouse_sk INT,
  cr_reason_sk INT,
  cr_order_number BIGINT,
  cr_return_quantity INT,
  cr_return_amount DECIMAL(7,2),
  cr_return_tax DECIMAL(7,2),
  cr_return_amt_inc_tax DECIMAL(7,2),
  cr_fee DECIMAL(7,2),
  cr_return_ship_cost DECIMAL(7,2),
  cr_refunded_cash DECIMAL(7,2),
  cr_reversed_charge DECIMAL(7,2),
  cr_store_credit DECIMAL(7,2),
  cr_net_loss DECIMAL(7,2)
);
"#,
    },
    DdlDefinition {
        table: "catalog_sales",
        sql: r#"
CREATE OR REPLACE TABLE {CATALOG_SALES_TABLE} (
  cs_sold_date_sk INT,
  cs_sold_time_sk INT,
  cs_ship_date_sk INT,
  cs_bill_customer_sk INT,
  cs_bill_cdemo_sk INT,
  cs_bill_hdemo_sk INT,
  cs_bill_addr_sk INT,
  cs_ship_customer_sk INT,
  cs_ship_cdemo_sk INT,
  cs_ship_hdemo_sk INT,
  cs_ship_addr_sk INT,
  cs_call_center_sk INT,
  cs_catalog_page_sk INT,
  cs_ship_mode_sk INT,
  cs_warehouse_sk INT,
  cs_item_sk INT,
  cs_promo_sk INT,
  cs_order_number BIGINT,
  cs_quantity INT,
  cs_wholesale_cost DECIMAL(7,2),
  cs_list_price DECIMAL(7,2),
  cs_sales_price DECIMAL(7,2),
  cs_ext_discount_amt DECIMAL(7,2),
  cs_ext_sales_price DECIMAL(7,2),
  cs_ext_wholesale_cost DECIMAL(7,2),
  cs_ext_list_price DECIMAL(7,2),
  cs_ext_tax DECIMAL(7,2),
  cs_coupon_amt DECIMAL(7,2),
  cs_ext_ship_cost DECIMAL(7,2),
  cs_net_paid DECIMAL(7,2),
  cs_net_paid_inc_tax DECIMAL(7,2),
  cs_net_paid_inc_ship DECIMAL(7,2),
  cs_net_paid_inc_ship_tax DECIMAL(7,2),
  cs_net_profit DECIMAL(7,2)
);
"#,
    },
    DdlDefinition {
        table: "customer_address",
        sql: r#"
CREATE OR REPLACE TABLE {CUSTOMER_ADDRESS_TABLE} (
  ca_address_sk INT,
  ca_address_id VARCHAR(16),
  ca_street_number VARCHAR(10),
  ca_street_name VARCHAR(60),
  ca_street_type VARCHAR(15),
  ca_suite_number VARCHAR(10),
  ca_city VARCHAR(60),
  ca_county VARCHAR(30),
  ca_state VARCHAR(2),
  ca_zip VARCHAR(10),
  ca_country VARCHAR(20),
  ca_gmt_offset DECIMAL(5,2),
  ca_location_type VARCHAR(20)
);
"#,
    },
    DdlDefinition {
        table: "customer_demographics",
        sql: r#"
CREATE OR REPLACE TABLE {CUSTOMER_DEMOGRAPHICS_TABLE} (
  cd_demo_sk INT,
  cd_gender VARCHAR(1),
  cd_marital_status VARCHAR(1),
  cd_education_status VARCHAR(20),
  cd_purchase_estimate INT,
  cd_credit_rating VARCHAR(10),
  cd_dep_count INT,
  cd_dep_employed_count INT,
  cd_dep_college_count INT
);
"#,
    },
    DdlDefinition {
        table: "customer",
        sql: r#"
CREATE OR REPLACE TABLE {CUSTOMER_TABLE} (
  c_customer_sk INT,
  c_customer_id VARCHAR(16),
  c_current_cdemo_sk INT,
  c_current_hdemo_sk INT,
  c_current_addr_sk INT,
  c_first_shipto_date_sk INT,
  c_first_sales_date_sk INT,
  c_salutation VARCHAR(10),
  c_first_name VARCHAR(20),
  c_last_name VARCHAR(30),
  c_preferred_cust_flag VARCHAR(1),
  c_birth_day INT,
  c_birth_month INT,
  c_birth_year INT,
  c_birth_country VARCHAR(20),
  c_login VARCHAR(13),
  c_email_address VARCHAR(50),
  c_last_review_date_sk INT
);
"#,
    },
    DdlDefinition {
        table: "date_dim",
        sql: r#"
CREATE OR REPLACE TABLE {DATE_DIM_TABLE} (
  d_date_sk INT,
  d_date_id VARCHAR(16),
  d_date DATE,
  d_month_seq INT,
  d_week_seq INT,
  d_quarter_seq INT,
  d_year INT,
  d_dow INT,
  d_moy INT,
  d_dom INT,
  d_qoy INT,
  d_fy_year INT,
  d_fy_quarter_seq INT,
  d_fy_week_seq INT,
  d_day_name VARCHAR(9),
  d_quarter_name VARCHAR(6),
  d_holiday VARCHAR(1),
  d_weekend VARCHAR(1),
  d_following_holiday VARCHAR(1),
  d_first_dom INT,
  d_last_dom INT,
  d_same_day_ly INT,
  d_same_day_lq INT,
  d_current_day VARCHAR(1),
  d_current_week VARCHAR(1),
  d_current_month VARCHAR(1),
  d_current_quarter VARCHAR(1),
  d_current_year VARCHAR(1)
);
"#,
    },
    DdlDefinition {
        table: "household_demographics",
        sql: r#"
CREATE OR REPLACE TABLE {HOUSEHOLD_DEMOGRAPHICS_TABLE} (
  hd_demo_sk INT,
  hd_income_band_sk INT,
  hd_buy_potential VARCHAR(15),
  hd_dep_count INT,
  hd_vehicle_count INT
);
"#,
    },
    DdlDefinition {
        table: "income_band",
        sql: r#"
CREATE OR REPLACE TABLE {INCOME_BAND_TABLE} (
  ib_income_band_sk INT,
  ib_lower_bound INT,
  ib_upper_bound INT
);
"#,
    },
    DdlDefinition {
        table: "inventory",
        sql: r#"
CREATE OR REPLACE TABLE {INVENTORY_TABLE} (
  inv_date_sk INT,
  inv_item_sk INT,
  inv_warehouse_sk INT,
  inv_quantity_on_hand INT
);
"#,
    },
    DdlDefinition {
        table: "item",
        sql: r#"
CREATE OR REPLACE TABLE {ITEM_TABLE} (
  i_item_sk INT,
  i_item_id VARCHAR(16),
  i_rec_start_date DATE,
  i_rec_end_date DATE,
  i_item_desc VARCHAR(200),
  i_current_price DECIMAL(7,2),
  i_wholesale_cost DECIMAL(7,2),
  i_brand_id INT,
  i_brand VARCHAR(50),
  i_class_id INT,
  i_class VARCHAR(50),
  i_category_id INT,
  i_category VARCHAR(50),
  i_manufact_id INT,
  i_manufact VARCHAR(50),
  i_size VARCHAR(20),
  i_formulation VARCHAR(20),
  i_color VARCHAR(20),
  i_units VARCHAR(10),
  i_container VARCHAR(10),
  i_manager_id INT,
  i_product_name VARCHAR(50)
);
"#,
    },
    DdlDefinition {
        table: "promotion",
        sql: r#"
CREATE OR REPLACE TABLE {PROMOTION_TABLE} (
  p_promo_sk INT,
  p_promo_id VARCHAR(16),
  p_start_date_sk INT,
  p_end_date_sk INT,
  p_item_sk INT,
  p_cost DECIMAL(15,
  2) DECIMAL(7,2),
  p_response_target INT,
  p_promo_name VARCHAR(50),
  p_channel_dmail VARCHAR(1),
  p_channel_email VARCHAR(1),
  p_channel_catalog VARCHAR(1),
  p_channel_tv VARCHAR(1),
  p_channel_radio VARCHAR(1),
  p_channel_press VARCHAR(1),
  p_channel_event VARCHAR(1),
  p_channel_demo VARCHAR(1),
  p_channel_details VARCHAR(100),
  p_purpose VARCHAR(15),
  p_discount_active VARCHAR(1)
);
"#,
    },
    DdlDefinition {
        table: "reason",
        sql: r#"
CREATE OR REPLACE TABLE {REASON_TABLE} (
  r_reason_sk INT,
  r_reason_id VARCHAR(16),
  r_reason_desc VARCHAR(100)
);
"#,
    },
    DdlDefinition {
        table: "ship_mode",
        sql: r#"
CREATE OR REPLACE TABLE {SHIP_MODE_TABLE} (
  sm_ship_mode_sk INT,
  sm_ship_mode_id VARCHAR(16),
  sm_type VARCHAR(30),
  sm_code VARCHAR(10),
  sm_carrier VARCHAR(20),
  sm_contract VARCHAR(20)
);
"#,
    },
    DdlDefinition {
        table: "store_returns",
        sql: r#"
CREATE OR REPLACE TABLE {STORE_RETURNS_TABLE} (
  sr_returned_date_sk INT,
  sr_return_time_sk INT,
  sr_item_sk INT,
  sr_customer_sk INT,
  sr_cdemo_sk INT,
  sr_hdemo_sk INT,
  sr_addr_sk INT,
  sr_store_sk INT,
  sr_reason_sk INT,
  sr_ticket_number BIGINT,
  sr_return_quantity INT,
  sr_return_amt DECIMAL(7,2),
  sr_return_tax DECIMAL(7,2),
  sr_return_amt_inc_tax DECIMAL(7,2),
  sr_fee DECIMAL(7,2),
  sr_return_ship_cost DECIMAL(7,2),
  sr_refunded_cash DECIMAL(7,2),
  sr_reversed_charge DECIMAL(7,2),
  sr_store_credit DECIMAL(7,2),
  sr_net_loss DECIMAL(7,2)
);
"#,
    },
    DdlDefinition {
        table: "store_sales",
        sql: r#"
CREATE OR REPLACE TABLE {STORE_SALES_TABLE} (
  ss_sold_date_sk INT,
  ss_sold_time_sk INT,
  ss_item_sk INT,
  ss_customer_sk INT,
  ss_cdemo_sk INT,
  ss_hdemo_sk INT,
  ss_addr_sk INT,
  ss_store_sk INT,
  ss_promo_sk INT,
  ss_ticket_number BIGINT,
  ss_quantity INT,
  ss_wholesale_cost DECIMAL(7,2),
  ss_list_price DECIMAL(7,2),
  ss_sales_price DECIMAL(7,2),
  ss_ext_discount_amt DECIMAL(7,2),
  ss_ext_sales_price DECIMAL(7,2),
  ss_ext_wholesale_cost DECIMAL(7,2),
  ss_ext_list_price DECIMAL(7,2),
  ss_ext_tax DECIMAL(7,2),
  ss_coupon_amt DECIMAL(7,2),
  ss_net_paid DECIMAL(7,2),
  ss_net_paid_inc_tax DECIMAL(7,2),
  ss_net_profit DECIMAL(7,2)
);
"#,
    },
    DdlDefinition {
        table: "store",
        sql: r#"
CREATE OR REPLACE TABLE {STORE_TABLE} (
  s_store_sk INT,
  s_store_id VARCHAR(16),
  s_rec_start_date DATE,
  s_rec_end_date DATE,
  s_closed_date_sk INT,
  s_store_name VARCHAR(50),
  s_number_employees INT,
  s_floor_space INT,
  s_hours VARCHAR(20),
  s_manager VARCHAR(40),
  s_market_id INT,
  s_geography_class VARCHAR(100),
  s_market_desc VARCHAR(100),
  s_market_manager VARCHAR(40),
  s_division_id INT,
  s_division_name VARCHAR(50),
  s_company_id INT,
  s_company_name VARCHAR(50),
  s_street_number VARCHAR(10),
  s_street_name VARCHAR(60),
  s_street_type VARCHAR(15),
  s_suite_number VARCHAR(10),
  s_city VARCHAR(60),
  s_county VARCHAR(30),
  s_state VARCHAR(2),
  s_zip VARCHAR(10),
  s_country VARCHAR(20),
  s_gmt_offset DECIMAL(5,2),
  s_tax_precentage DECIMAL(5,2)
);
"#,
    },
    DdlDefinition {
        table: "time_dim",
        sql: r#"
CREATE OR REPLACE TABLE {TIME_DIM_TABLE} (
  t_time_sk INT,
  t_time_id VARCHAR(16),
  t_time INT,
  t_hour INT,
  t_minute INT,
  t_second INT,
  t_am_pm VARCHAR(2),
  t_shift VARCHAR(20),
  t_sub_shift VARCHAR(20),
  t_meal_time VARCHAR(20)
);
"#,
    },
    DdlDefinition {
        table: "warehouse",
        sql: r#"
CREATE OR REPLACE TABLE {WAREHOUSE_TABLE} (
  w_warehouse_sk INT,
  w_warehouse_id VARCHAR(16),
  w_warehouse_name VARCHAR(20),
  w_warehouse_sq_ft INT,
  w_street_number VARCHAR(10),
  w_street_name VARCHAR(60),
  w_street_type VARCHAR(15),
  w_suite_number VARCHAR(10),
  w_city VARCHAR(60),
  w_county VARCHAR(30),
  w_state VARCHAR(2),
  w_zip VARCHAR(10),
  w_country VARCHAR(20),
  w_gmt_offset DECIMAL(5,2)
);
"#,
    },
    DdlDefinition {
        table: "web_page",
        sql: r#"
CREATE OR REPLACE TABLE {WEB_PAGE_TABLE} (
  wp_web_page_sk INT,
  wp_web_page_id VARCHAR(16),
  wp_rec_start_date DATE,
  wp_rec_end_date DATE,
  wp_creation_date_sk INT,
  wp_access_date_sk INT,
  wp_autogen_flag VARCHAR(1),
  wp_customer_sk INT,
  wp_url VARCHAR(100),
  wp_type VARCHAR(50),
  wp_char_count INT,
  wp_link_count INT,
  wp_image_count INT,
  wp_max_ad_count INT
);
"#,
    },
    DdlDefinition {
        table: "web_returns",
        sql: r#"
CREATE OR REPLACE TABLE {WEB_RETURNS_TABLE} (
  wr_returned_date_sk INT,
  wr_returned_time_sk INT,
  wr_item_sk INT,
  wr_refunded_customer_sk INT,
  wr_refunded_cdemo_sk INT,
  wr_refunded_hdemo_sk INT,
  wr_refunded_addr_sk INT,
  wr_returning_customer_sk INT,
  wr_returning_cdemo_sk INT,
  wr_returning_hdemo_sk INT,
  wr_returning_addr_sk INT,
  wr_web_page_sk INT,
  wr_reason_sk INT,
  wr_order_number BIGINT,
  wr_return_quantity INT,
  wr_return_amt DECIMAL(7,2),
  wr_return_tax DECIMAL(7,2),
  wr_return_amt_inc_tax DECIMAL(7,2),
  wr_fee DECIMAL(7,2),
  wr_return_ship_cost DECIMAL(7,2),
  wr_refunded_cash DECIMAL(7,2),
  wr_reversed_charge DECIMAL(7,2),
  wr_account_credit DECIMAL(7,2),
  wr_net_loss DECIMAL(7,2)
);
"#,
    },
    DdlDefinition {
        table: "web_sales",
        sql: r#"
CREATE OR REPLACE TABLE {WEB_SALES_TABLE} (
  ws_sold_date_sk INT,
  ws_sold_time_sk INT,
  ws_ship_date_sk INT,
  ws_item_sk INT,
  ws_bill_customer_sk INT,
  ws_bill_cdemo_sk INT,
  ws_bill_hdemo_sk INT,
  ws_bill_addr_sk INT,
  ws_ship_customer_sk INT,
  ws_ship_cdemo_sk INT,
  ws_ship_hdemo_sk INT,
  ws_ship_addr_sk INT,
  ws_web_page_sk INT,
  ws_web_site_sk INT,
  ws_ship_mode_sk INT,
  ws_warehouse_sk INT,
  ws_promo_sk INT,
  ws_order_number BIGINT,
  ws_quantity INT,
  ws_wholesale_cost DECIMAL(7,2),
  ws_list_price DECIMAL(7,2),
  ws_sales_price DECIMAL(7,2),
  ws_ext_discount_amt DECIMAL(7,2),
  ws_ext_sales_price DECIMAL(7,2),
  ws_ext_wholesale_cost DECIMAL(7,2),
  ws_ext_list_price DECIMAL(7,2),
  ws_ext_tax DECIMAL(7,2),
  ws_coupon_amt DECIMAL(7,2),
  ws_ext_ship_cost DECIMAL(7,2),
  ws_net_paid DECIMAL(7,2),
  ws_net_paid_inc_tax DECIMAL(7,2),
  ws_net_paid_inc_ship DECIMAL(7,2),
  ws_net_paid_inc_ship_tax DECIMAL(7,2),
  ws_net_profit DECIMAL(7,2)
);
"#,
    },
    DdlDefinition {
        table: "web_site",
        sql: r#"
CREATE OR REPLACE TABLE {WEB_SITE_TABLE} (
  web_site_sk INT,
  web_site_id VARCHAR(16),
  web_rec_start_date DATE,
  web_rec_end_date DATE,
  web_name VARCHAR(50),
  web_open_date_sk INT,
  web_close_date_sk INT,
  web_class VARCHAR(50),
  web_manager VARCHAR(40),
  web_mkt_id INT,
  web_mkt_class VARCHAR(50),
  web_mkt_desc VARCHAR(100),
  web_market_manager VARCHAR(40),
  web_company_id INT,
  web_company_name VARCHAR(50),
  web_street_number VARCHAR(10),
  web_street_name VARCHAR(60),
  web_street_type VARCHAR(15),
  web_suite_number VARCHAR(10),
  web_city VARCHAR(60),
  web_county VARCHAR(30),
  web_state VARCHAR(2),
  web_zip VARCHAR(10),
  web_country VARCHAR(20),
  web_gmt_offset DECIMAL(5,2),
  web_tax_percentage DECIMAL(5,2)
);
"#,
    },
];
